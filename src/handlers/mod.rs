pub mod country;
pub mod health;
pub mod home;

use std::sync::Arc;
use anyhow::{Context, Result};
use url::Url;

use crate::templates::AppContext;

/// State of service A. The HTTP client is shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub country_url: Url,
    pub base_path: String,
}

impl AppState {
    pub fn new(country_url: Url, base_path: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, country_url, base_path))
    }

    pub fn with_client(client: reqwest::Client, country_url: Url, base_path: String) -> Self {
        Self {
            client,
            country_url,
            base_path,
        }
    }
}

pub fn build_ctx(state: &Arc<AppState>) -> AppContext {
    AppContext {
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn base_path_url(state: &Arc<AppState>, path: &str) -> String {
    if state.base_path == "/" {
        path.to_string()
    } else {
        format!("{}{}", state.base_path, path)
    }
}
