pub mod health_handler;
pub mod physics_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use physics_handler::{generate_physics, sample_questions};

/// Registers every route; shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_physics)
        .service(sample_questions)
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready);
}
