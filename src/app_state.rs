use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_client::{LanguageModel, OpenAiCompatibleModel},
        physics_service::PhysicsService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub physics_service: Arc<PhysicsService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = Arc::new(OpenAiCompatibleModel::from_config(&config));
        Self::with_model(config, model)
    }

    /// Builds state around any model backend; tests pass scripted ones.
    pub fn with_model(config: Config, model: Arc<dyn LanguageModel>) -> Self {
        let physics_service = Arc::new(PhysicsService::new(model, &config));

        Self {
            physics_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationMode;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_uses_configured_mode() {
        let mut config = Config::test_config();
        config.generation_mode = GenerationMode::Text;

        let state = AppState::new(config);
        assert_eq!(state.physics_service.mode(), GenerationMode::Text);
    }
}
