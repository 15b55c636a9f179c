use crate::models::domain::{GeneratedPrompt, PhysicsResult};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Model output for the animation stage, as the provider returns it
    pub fn physics_json() -> String {
        r#"{"analysis":"a","solution":"b","code":"<html></html>","concepts":["gravity"]}"#
            .to_string()
    }

    /// Model output for the brief stage
    pub fn brief_json() -> String {
        serde_json::to_string(&free_fall_brief()).expect("brief fixture serializes")
    }

    pub fn free_fall_brief() -> GeneratedPrompt {
        GeneratedPrompt {
            topic: "Free Fall".to_string(),
            key_concepts: vec!["gravity".to_string(), "kinematics".to_string()],
            formulas: vec!["h = ½gt²".to_string(), "v = gt".to_string()],
            animation_prompt: "Drop a ball from 30 m and show velocity and height".to_string(),
        }
    }

    pub fn physics_result() -> PhysicsResult {
        PhysicsResult {
            analysis: "a".to_string(),
            solution: "b".to_string(),
            code: "<html></html>".to_string(),
            concepts: vec!["gravity".to_string()],
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_normalizer::{normalize_generated_prompt, normalize_text};

    #[test]
    fn test_fixtures_physics_json_normalizes_to_physics_result() {
        assert_eq!(normalize_text(&physics_json()), physics_result());
    }

    #[test]
    fn test_fixtures_brief_json_round_trips() {
        assert_eq!(normalize_generated_prompt(&brief_json()), Some(free_fall_brief()));
    }
}
