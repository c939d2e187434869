use askama::Template;

#[derive(Clone)]
pub struct AppContext {
    pub version: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: AppContext,
    pub title: String,
    pub country_url: String,
}
