use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// JSON schema the model is asked to conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: Value,
}

impl ResponseSchema {
    pub fn for_type<T: JsonSchema>(name: impl Into<String>) -> AppResult<Self> {
        let mut schema = serde_json::to_value(schemars::schema_for!(T))?;
        if let Some(object) = schema.as_object_mut() {
            object.remove("$schema");
            object.remove("title");
        }
        Ok(Self {
            name: name.into(),
            schema,
        })
    }
}

/// One chat-completion call: a system prompt, a user prompt and, in
/// structured mode, the schema the answer must follow.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub response_schema: Option<ResponseSchema>,
    pub temperature: f32,
    pub api_key: SecretString,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns the raw text content of the first choice.
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Talks to any OpenAI-compatible chat-completions endpoint (Cerebras, OpenAI).
pub struct OpenAiCompatibleModel {
    api_base: String,
    model: String,
    timeout: Option<Duration>,
}

impl OpenAiCompatibleModel {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            model: model.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_config(config: &Config) -> Self {
        let model = Self::new(&config.llm_api_base, &config.llm_model);
        match config.llm_timeout_seconds {
            Some(seconds) => model.with_timeout(Duration::from_secs(seconds)),
            None => model,
        }
    }

    // Keys may differ per request, so the client is built per call.
    fn client_for(&self, api_key: &SecretString) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_base(&self.api_base)
            .with_api_key(api_key.expose_secret());
        Client::with_config(config)
    }

    pub fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt },
            ],
            "temperature": request.temperature,
        });

        if let Some(schema) = &request.response_schema {
            body["response_format"] = json!({
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "schema": schema.schema,
                    "strict": false,
                },
            });
        }

        body
    }

    async fn send(&self, request: &CompletionRequest) -> AppResult<ChatCompletion> {
        let client = self.client_for(&request.api_key);
        let completion: ChatCompletion = client
            .chat()
            .create_byot(self.request_body(request))
            .await?;
        Ok(completion)
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompatibleModel {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        log::info!(
            "Requesting completion from model {} at {} (structured: {})",
            self.model,
            self.api_base,
            request.response_schema.is_some()
        );

        let completion = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.send(&request))
                .await
                .map_err(|_| {
                    AppError::UpstreamError(format!(
                        "Model did not respond within {} seconds",
                        timeout.as_secs()
                    ))
                })??,
            None => self.send(&request).await?,
        };

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            log::error!("Model {} returned no choices", self.model);
            AppError::UpstreamError("Model returned no choices".to_string())
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::RawPhysicsResult;

    fn request(schema: Option<ResponseSchema>) -> CompletionRequest {
        CompletionRequest {
            system: "system".to_string(),
            prompt: "Physics Question: pendulum".to_string(),
            response_schema: schema,
            temperature: 0.3,
            api_key: SecretString::from("csk-test".to_string()),
        }
    }

    #[test]
    fn request_body_carries_messages_and_temperature() {
        let model = OpenAiCompatibleModel::new("https://api.cerebras.ai/v1", "qwen-3-coder-480b");
        let body = model.request_body(&request(None));

        assert_eq!(body["model"], "qwen-3-coder-480b");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Physics Question: pendulum");
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn request_body_includes_schema_in_structured_mode() {
        let model = OpenAiCompatibleModel::new("https://api.openai.com/v1", "gpt-4o-mini");
        let schema = ResponseSchema::for_type::<RawPhysicsResult>("physics_result").unwrap();
        let body = model.request_body(&request(Some(schema)));

        let format = &body["response_format"];
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["name"], "physics_result");
        assert!(format["json_schema"]["schema"]["properties"]["code"].is_object());
    }

    #[test]
    fn response_schema_strips_meta_keys() {
        let schema = ResponseSchema::for_type::<RawPhysicsResult>("physics_result").unwrap();

        assert!(schema.schema.get("$schema").is_none());
        assert!(schema.schema.get("title").is_none());
        assert!(schema.schema["properties"]["analysis"].is_object());
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let rendered = format!("{:?}", request(None));
        assert!(!rendered.contains("csk-test"));
    }

    #[test]
    fn from_config_applies_timeout() {
        let mut config = Config::test_config();
        config.llm_timeout_seconds = Some(45);
        let model = OpenAiCompatibleModel::from_config(&config);

        assert_eq!(model.timeout, Some(Duration::from_secs(45)));
        assert_eq!(model.model, config.llm_model);
    }
}
