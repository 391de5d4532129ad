// Outfit generation: prompt → tags → embedding → ranking → selection → description.
// All LLM calls go through llm_client capability traits.

pub mod describer;
pub mod embedding;
pub mod feedback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod ranking;
pub mod selection;
pub mod tags;
