use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Body of `POST /api/generate-physics`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePhysicsRequest {
    // Blank questions are read as absent so `required` rejects both.
    #[serde(default, deserialize_with = "trimmed_non_empty")]
    #[validate(required(message = "Question is required"))]
    pub question: Option<String>,

    #[serde(
        default,
        deserialize_with = "trimmed_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<String>,
}

impl GeneratePhysicsRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

fn trimmed_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
