use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use open_brilliant_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
    services::http_helpers::json_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let origin = config.cors_allowed_origin.clone();

    log::info!(
        "Generating with {} model {} ({} mode)",
        config.llm_provider.display_name(),
        config.llm_model,
        config.generation_mode
    );

    let state = AppState::new(config);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
