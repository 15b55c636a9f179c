use std::{env, fmt, str::FromStr};

use secrecy::SecretString;

pub const CEREBRAS_API_BASE: &str = "https://api.cerebras.ai/v1";
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const CEREBRAS_DEFAULT_MODEL: &str = "qwen-3-coder-480b";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    Cerebras,
    OpenAi,
}

impl LlmProvider {
    pub fn default_api_base(&self) -> &'static str {
        match self {
            LlmProvider::Cerebras => CEREBRAS_API_BASE,
            LlmProvider::OpenAi => OPENAI_API_BASE,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Cerebras => CEREBRAS_DEFAULT_MODEL,
            LlmProvider::OpenAi => OPENAI_DEFAULT_MODEL,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LlmProvider::Cerebras => "Cerebras",
            LlmProvider::OpenAi => "OpenAI",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cerebras" => Ok(LlmProvider::Cerebras),
            "openai" => Ok(LlmProvider::OpenAi),
            other => Err(format!("unknown LLM provider '{}'", other)),
        }
    }
}

/// How a question is turned into a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    /// Restructure the question first, then generate with a JSON schema.
    TwoStage,
    /// Single call with a JSON schema.
    Structured,
    /// Single call, free text scraped for a JSON object.
    Text,
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two_stage" | "two-stage" => Ok(GenerationMode::TwoStage),
            "structured" => Ok(GenerationMode::Structured),
            "text" => Ok(GenerationMode::Text),
            other => Err(format!("unknown generation mode '{}'", other)),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::TwoStage => write!(f, "two_stage"),
            GenerationMode::Structured => write!(f, "structured"),
            GenerationMode::Text => write!(f, "text"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_provider: LlmProvider,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_api_key: Option<SecretString>,
    pub require_client_api_key: bool,
    pub generation_mode: GenerationMode,
    pub temperature: f32,
    pub llm_timeout_seconds: Option<u64>,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let llm_provider = env::var("LLM_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(LlmProvider::Cerebras);

        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            llm_provider,
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| llm_provider.default_api_base().to_string()),
            llm_model: env::var("LLM_MODEL")
                .unwrap_or_else(|_| llm_provider.default_model().to_string()),
            llm_api_key: env::var("LLM_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            require_client_api_key: env::var("REQUIRE_CLIENT_API_KEY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            generation_mode: env::var("GENERATION_MODE")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(GenerationMode::TwoStage),
            temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.3),
            llm_timeout_seconds: env::var("LLM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    /// True when some request could ever carry a usable key.
    pub fn has_key_source(&self) -> bool {
        self.llm_api_key.is_some() || self.require_client_api_key
    }

    /// Validate that the server can actually reach a provider.
    /// Panics if no API key source is configured.
    pub fn validate_for_production(&self) {
        if !self.has_key_source() {
            panic!(
                "FATAL: no API key source configured! Set LLM_API_KEY, or set REQUIRE_CLIENT_API_KEY=true so callers supply their own key."
            );
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            panic!(
                "FATAL: LLM_TEMPERATURE must be between 0.0 and 2.0, got {}.",
                self.temperature
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            llm_provider: LlmProvider::Cerebras,
            llm_api_base: CEREBRAS_API_BASE.to_string(),
            llm_model: CEREBRAS_DEFAULT_MODEL.to_string(),
            llm_api_key: Some(SecretString::from("test_server_key".to_string())),
            require_client_api_key: false,
            generation_mode: GenerationMode::TwoStage,
            temperature: 0.3,
            llm_timeout_seconds: None,
            cors_allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}
