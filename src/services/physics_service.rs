use std::sync::Arc;

use secrecy::SecretString;
use validator::Validate;

use crate::{
    config::{Config, GenerationMode},
    constants::prompts::{
        physics_user_prompt, prompt_generator_user_prompt, PHYSICS_SYSTEM_PROMPT,
        PROMPT_GENERATOR_SYSTEM, TEXT_MODE_SUFFIX,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{GeneratedPrompt, PhysicsResult, RawPhysicsResult},
        dto::{request::GeneratePhysicsRequest, response::GeneratePhysicsResponse},
    },
    services::{
        model_client::{CompletionRequest, LanguageModel, ResponseSchema},
        pipeline_steps::{stages_for, PipelineStage, StageKind},
        response_normalizer::{normalize_generated_prompt, normalize_structured, normalize_text},
    },
};

/// Turns a question into a [`GeneratePhysicsResponse`] by running the
/// configured pipeline against a [`LanguageModel`].
pub struct PhysicsService {
    model: Arc<dyn LanguageModel>,
    mode: GenerationMode,
    temperature: f32,
    server_api_key: Option<SecretString>,
    require_client_api_key: bool,
    provider_name: &'static str,
}

impl PhysicsService {
    pub fn new(model: Arc<dyn LanguageModel>, config: &Config) -> Self {
        Self {
            model,
            mode: config.generation_mode,
            temperature: config.temperature,
            server_api_key: config.llm_api_key.clone(),
            require_client_api_key: config.require_client_api_key,
            provider_name: config.llm_provider.display_name(),
        }
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub async fn generate(
        &self,
        request: GeneratePhysicsRequest,
    ) -> AppResult<GeneratePhysicsResponse> {
        request.validate()?;
        let question = request
            .question
            .ok_or_else(|| AppError::ValidationError("Question is required".to_string()))?;
        let api_key = self.resolve_api_key(request.api_key)?;

        let mut brief: Option<GeneratedPrompt> = None;
        let mut result: Option<PhysicsResult> = None;

        for stage in stages_for(self.mode) {
            log::info!("Running stage {}: {}", stage.name, stage.description);
            match stage.kind {
                StageKind::GeneratePrompt => {
                    brief = self.generate_prompt(&question, &api_key, &stage).await?;
                }
                StageKind::GeneratePhysics => {
                    result = Some(
                        self.generate_physics(&question, brief.as_ref(), &api_key, &stage)
                            .await?,
                    );
                }
            }
        }

        let result = result.ok_or_else(|| {
            AppError::InternalError("Generation pipeline produced no result".to_string())
        })?;

        Ok(GeneratePhysicsResponse::new(result, brief))
    }

    fn resolve_api_key(&self, client_key: Option<String>) -> AppResult<SecretString> {
        if let Some(key) = client_key {
            return Ok(SecretString::from(key));
        }

        if self.require_client_api_key {
            return Err(AppError::MissingCredential(format!(
                "API key is required. Please add your {} API key in settings.",
                self.provider_name
            )));
        }

        self.server_api_key.clone().ok_or_else(|| {
            AppError::MissingCredential(format!(
                "No {} API key is configured on the server. Please add your API key in settings.",
                self.provider_name
            ))
        })
    }

    /// A brief that cannot be read is dropped; the animation stage then runs
    /// on the bare question.
    async fn generate_prompt(
        &self,
        question: &str,
        api_key: &SecretString,
        stage: &PipelineStage,
    ) -> AppResult<Option<GeneratedPrompt>> {
        let response_schema = if stage.structured {
            Some(ResponseSchema::for_type::<GeneratedPrompt>("generated_prompt")?)
        } else {
            None
        };

        let raw = self
            .model
            .complete(CompletionRequest {
                system: PROMPT_GENERATOR_SYSTEM.to_string(),
                prompt: prompt_generator_user_prompt(question),
                response_schema,
                temperature: self.temperature,
                api_key: api_key.clone(),
            })
            .await
            .inspect_err(|e| log::error!("Stage {} failed: {}", stage.name, e))?;

        let brief = normalize_generated_prompt(&raw);
        match &brief {
            Some(brief) => log::info!("Generated animation brief for topic '{}'", brief.topic),
            None => log::warn!("Animation brief could not be parsed; continuing without it"),
        }
        Ok(brief)
    }

    async fn generate_physics(
        &self,
        question: &str,
        brief: Option<&GeneratedPrompt>,
        api_key: &SecretString,
        stage: &PipelineStage,
    ) -> AppResult<PhysicsResult> {
        let (response_schema, prompt) = if stage.structured {
            (
                Some(ResponseSchema::for_type::<RawPhysicsResult>("physics_result")?),
                physics_user_prompt(question, brief),
            )
        } else {
            (
                None,
                format!("{}\n\n{}", physics_user_prompt(question, brief), TEXT_MODE_SUFFIX),
            )
        };

        let raw = self
            .model
            .complete(CompletionRequest {
                system: PHYSICS_SYSTEM_PROMPT.to_string(),
                prompt,
                response_schema,
                temperature: self.temperature,
                api_key: api_key.clone(),
            })
            .await
            .inspect_err(|e| log::error!("Stage {} failed: {}", stage.name, e))?;

        Ok(if stage.structured {
            normalize_structured(&raw)
        } else {
            normalize_text(&raw)
        })
    }
}
