use std::sync::Arc;
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use url::Url;

use crate::handlers::{base_path_url, build_ctx, AppState};
use crate::templates::HomeTemplate;

#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub country: String,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let tpl = HomeTemplate {
        ctx: build_ctx(&state),
        title: "Home | Service A".to_string(),
        country_url: base_path_url(&state, "/home/getcountry"),
    };

    let html = tpl.render()
        .map_err(|e: askama::Error| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Html(html))
}

/// Asks service B for a country and relays it as `{"country": ...}`.
pub async fn get_country(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CountryResponse>, (StatusCode, String)> {
    let country = fetch_country(&state.client, &state.country_url)
        .await
        .map_err(|e| {
            tracing::error!("Country lookup failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    tracing::info!(country = %country, "Received country");
    Ok(Json(CountryResponse { country }))
}

/// Single GET against the backend; the body is returned verbatim.
pub async fn fetch_country(client: &reqwest::Client, url: &Url) -> reqwest::Result<String> {
    client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
