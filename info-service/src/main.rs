mod config;
mod health;
mod home;
mod info;
mod routes;
mod state;

use config::Config;
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path =
        std::env::var("INFO_SERVICE_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let cfg = Config::load(&config_path)?;

    let app_state = Arc::new(AppState::from_config(&cfg));
    let app = routes::router(app_state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = resolve_listen_addr(&cfg).parse()?;
    info!(%addr, "Starting info-service");

    let server = axum::Server::bind(&addr).serve(app.into_make_service());

    let graceful = server.with_graceful_shutdown(shutdown_signal());
    graceful.await?;
    Ok(())
}

// `listen` pins an exact address; otherwise bind all interfaces on PORT,
// falling back to the configured port, then 8080.
fn resolve_listen_addr(cfg: &Config) -> String {
    if let Some(listen) = &cfg.listen {
        return listen.clone();
    }
    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .or(cfg.port)
        .unwrap_or(state::DEFAULT_PORT);
    format!("0.0.0.0:{port}")
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
