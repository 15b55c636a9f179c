use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    client::{ClientError, ClientResult},
    models::dto::{
        request::GeneratePhysicsRequest,
        response::{GeneratePhysicsResponse, SampleQuestionsResponse},
    },
};

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to generate physics visualization";

#[async_trait]
pub trait PhysicsApi: Send + Sync {
    async fn generate(
        &self,
        request: GeneratePhysicsRequest,
    ) -> ClientResult<GeneratePhysicsResponse>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Calls a running server over HTTP.
pub struct HttpPhysicsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPhysicsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn sample_questions(&self) -> ClientResult<Vec<String>> {
        let response = self
            .client
            .get(self.url("/api/sample-questions"))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let body: SampleQuestionsResponse = response
            .error_for_status()
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(body.questions)
    }
}

#[async_trait]
impl PhysicsApi for HttpPhysicsApi {
    async fn generate(
        &self,
        request: GeneratePhysicsRequest,
    ) -> ClientResult<GeneratePhysicsResponse> {
        let response = self
            .client
            .post(self.url("/api/generate-physics"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            log::debug!("Server answered {}: {}", status, message);
            return Err(ClientError::Api(message));
        }

        response
            .json::<GeneratePhysicsResponse>()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
