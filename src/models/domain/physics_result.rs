use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::fallback::{
    FALLBACK_ANALYSIS, FALLBACK_CONCEPT, FALLBACK_HTML, FALLBACK_SOLUTION,
};
use crate::models::domain::TextOrList;

/// Result shape as the model is allowed to produce it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RawPhysicsResult {
    /// Brief explanation of the physics concept with key formulas
    pub analysis: TextOrList,
    /// Step-by-step solution approach following the 3-step process
    pub solution: TextOrList,
    /// Complete HTML code with animation
    pub code: String,
    /// Array of physics concepts
    pub concepts: TextOrList,
}

/// One generated explanation plus its self-contained animation page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhysicsResult {
    pub analysis: String,
    pub solution: String,
    /// Full HTML document with embedded CSS and JS. Never parsed server-side.
    pub code: String,
    pub concepts: Vec<String>,
}

impl PhysicsResult {
    pub fn fallback() -> Self {
        Self {
            analysis: FALLBACK_ANALYSIS.to_string(),
            solution: FALLBACK_SOLUTION.to_string(),
            code: FALLBACK_HTML.to_string(),
            concepts: vec![FALLBACK_CONCEPT.to_string()],
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.code == FALLBACK_HTML
    }
}

impl From<RawPhysicsResult> for PhysicsResult {
    fn from(raw: RawPhysicsResult) -> Self {
        Self {
            analysis: raw.analysis.into_text(),
            solution: raw.solution.into_text(),
            code: raw.code,
            concepts: raw.concepts.into_list(),
        }
    }
}
