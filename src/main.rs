mod config;
mod error;
mod frontend;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;
use translate::TranslationClientFactory;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translingua=debug,tower_http=debug")),
        )
        .init();

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let (mut config, loaded_path) = Config::discover(&config_paths);
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }
    config.apply_env(|name| std::env::var(name).ok());

    // Fail fast: nothing works without the provider credential.
    let api_key = config.require_api_key()?;
    let translator = TranslationClientFactory::create_client(&config.llm_config, api_key)?;

    let app_state = AppState::new(translator)?;
    let app = routes::build_app(app_state);

    let system_config = &config.system_config;
    let listener =
        tokio::net::TcpListener::bind((system_config.host.as_str(), system_config.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
