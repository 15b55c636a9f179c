pub mod http_helpers;
pub mod model_client;
pub mod physics_service;
pub mod pipeline_steps;
pub mod response_normalizer;
