mod config;
mod logging;
mod routes;

use config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    logging::init();

    let config = SiteConfig::from_env()?;
    let conf = leptos::prelude::get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(&config, conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
