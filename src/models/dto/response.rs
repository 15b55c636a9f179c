use serde::{Deserialize, Serialize};

use crate::models::domain::{GeneratedPrompt, PhysicsResult};

/// Successful body of `POST /api/generate-physics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePhysicsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: PhysicsResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_prompt: Option<GeneratedPrompt>,
}

impl GeneratePhysicsResponse {
    pub fn new(result: PhysicsResult, generated_prompt: Option<GeneratedPrompt>) -> Self {
        Self {
            success: true,
            result,
            generated_prompt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleQuestionsResponse {
    pub questions: Vec<String>,
}
