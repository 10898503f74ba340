use actix_cors::Cors;
use actix_web::{
    middleware::{Logger, NormalizePath},
    web, App, HttpServer,
};

use quizes_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.rust_log.as_str()),
    )
    .init();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(&config).await.map_err(|err| {
        log::error!("Failed to initialise application state: {}", err);
        std::io::Error::other(err.to_string())
    })?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
