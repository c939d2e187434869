use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::config::ServerArgs;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

pub async fn serve(app: Router, server: &ServerArgs, base_path: &str) -> Result<()> {
    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}{}", addr, base_path);

    axum::serve(listener, app).await?;

    Ok(())
}
