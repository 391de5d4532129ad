//! Scripted capability fakes for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Embedder, LlmError, TextGenerator};

/// Replays queued completions in order and records every request it receives.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Tag extraction followed by outfit description, both succeeding.
    pub fn happy(tags: &[&str], name: &str, description: &str) -> Self {
        Self::new(vec![
            Ok(serde_json::json!({ "tags": tags }).to_string()),
            Ok(serde_json::json!({ "name": name, "description": description }).to_string()),
        ])
    }

    /// `(system, user)` pairs in call order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.requests
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

/// Returns the same vector for every input and records the inputs.
pub struct FixedEmbedder {
    vector: Vec<f32>,
    inputs: Mutex<Vec<String>>,
}

impl FixedEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Embedder for FixedEmbedder {
    async fn embed(&self, input: &str) -> Result<Vec<f32>, LlmError> {
        self.inputs.lock().unwrap().push(input.to_string());
        Ok(self.vector.clone())
    }
}
