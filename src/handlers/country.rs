use axum::http::StatusCode;
use rand::Rng;

pub const COUNTRIES: [&str; 12] = [
    "Australia",
    "Brazil",
    "Canada",
    "China",
    "France",
    "Germany",
    "India",
    "Japan",
    "Russia",
    "South Africa",
    "UK",
    "USA",
];

/// Picks one entry of [`COUNTRIES`] uniformly at random.
pub fn pick_country<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COUNTRIES[rng.random_range(0..COUNTRIES.len())]
}

pub async fn country() -> (StatusCode, &'static str) {
    let country = pick_country(&mut rand::rng());
    tracing::debug!(country, "Picked country");
    (StatusCode::OK, country)
}
