// All LLM prompt constants for the outfit pipeline.

/// System instruction for tag extraction. The user message is the raw prompt.
pub const TAG_EXTRACTION_SYSTEM: &str = "You are a fashion expert. \
    A client describes the outfit they want in their own words. \
    Return a list of short stylistic tags that describe that outfit. \
    Respond with a JSON object only, in exactly this format: { \"tags\": string[] }";

/// System instruction for naming and describing a selected outfit.
pub const DESCRIPTION_SYSTEM: &str = "You are a fashion expert. \
    Given an outfit request and the pieces chosen for it, create a name and a detailed \
    description for the outfit. \
    Respond with a JSON object only, in exactly this format: \
    { \"name\": string, \"description\": string }";

/// Description request template. Replace `{prompt}` and `{pieces}` before sending.
pub const DESCRIPTION_PROMPT_TEMPLATE: &str =
    "Create a name and description for this outfit. Prompt: {prompt}. Pieces: {pieces}";

/// Regeneration prompt template. Replace `{prompt}` and `{feedback}`.
pub const FEEDBACK_PROMPT_TEMPLATE: &str =
    "{prompt}. Please modify the outfit based on this feedback: {feedback}";
