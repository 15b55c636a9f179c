use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Animation brief produced by the first generation stage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedPrompt {
    /// The main physics topic
    pub topic: String,
    /// Array of key physics concepts
    pub key_concepts: Vec<String>,
    /// Array of relevant physics formulas
    pub formulas: Vec<String>,
    /// Detailed description of what the animation should show
    pub animation_prompt: String,
}
