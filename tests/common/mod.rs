#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::Mutex;

use open_brilliant_server::{
    config::{Config, GenerationMode, LlmProvider, CEREBRAS_API_BASE, CEREBRAS_DEFAULT_MODEL},
    errors::{AppError, AppResult},
    services::model_client::{CompletionRequest, LanguageModel},
};

pub const PHYSICS_JSON: &str =
    r#"{"analysis":"a","solution":"b","code":"<html></html>","concepts":["gravity"]}"#;
pub const BRIEF_JSON: &str = r#"{"topic":"Free Fall","key_concepts":["gravity"],"formulas":["h = ½gt²"],"animation_prompt":"Drop a ball"}"#;

/// Replays canned model replies in order and records what it was asked.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<AppResult<String>>>,
    pub calls: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.calls.lock().await.push(request);
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AppError::InternalError("script exhausted".to_string())))
    }
}

pub fn config(mode: GenerationMode) -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        llm_provider: LlmProvider::Cerebras,
        llm_api_base: CEREBRAS_API_BASE.to_string(),
        llm_model: CEREBRAS_DEFAULT_MODEL.to_string(),
        llm_api_key: Some(SecretString::from("server-key".to_string())),
        require_client_api_key: false,
        generation_mode: mode,
        temperature: 0.3,
        llm_timeout_seconds: None,
        cors_allowed_origin: "http://localhost:3000".to_string(),
    }
}
