use anyhow::Result;
use clap::Parser;

use country_services::config::{normalize_base_path, ServiceBArgs};
use country_services::{server, service_b_router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let args = ServiceBArgs::parse();

    let base_path = normalize_base_path(&args.server.base_path);
    let app = service_b_router(&base_path);
    server::serve(app, &args.server, &base_path).await
}
