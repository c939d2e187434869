use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use country_services::config::{normalize_base_path, parse_country_url, ServiceAArgs};
use country_services::handlers::AppState;
use country_services::{server, service_a_router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let args = ServiceAArgs::parse();

    let country_url = parse_country_url(&args.country_url)?;
    let base_path = normalize_base_path(&args.server.base_path);
    let state = Arc::new(AppState::new(country_url, base_path.clone())?);
    tracing::info!("Country service at {}", state.country_url);

    let app = service_a_router(state);
    server::serve(app, &args.server, &base_path).await
}
