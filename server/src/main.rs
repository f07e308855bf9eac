mod config;
mod routes;

use config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let component_config = config::load_component_config(config.component_config_path.as_deref())?;
    tracing::info!(
        accordion_duration_ms = component_config.accordion.duration_ms,
        "component config loaded"
    );

    let app = routes::app(component_config)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "showcase listening");
    axum::serve(listener, app).await?;
    Ok(())
}
