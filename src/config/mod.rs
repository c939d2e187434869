use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser};
use url::Url;

pub const DEFAULT_COUNTRY_URL: &str = "http://serviceb.acc3.example.local:8080/country";

/// Listener settings shared by both services
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Host for HTTP server
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for HTTP server
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Base path when running behind reverse proxy (e.g. /service-a)
    #[arg(long, env = "BASE_PATH", default_value = "/")]
    pub base_path: String,
}

impl ServerArgs {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Parser, Debug)]
#[command(name = "service-a")]
#[command(about = "Front service: home page and country lookup via service B", long_about = None)]
pub struct ServiceAArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// URL of service B's country endpoint
    #[arg(long, env = "COUNTRY_SERVICE_URL", default_value = DEFAULT_COUNTRY_URL)]
    pub country_url: String,
}

#[derive(Parser, Debug)]
#[command(name = "service-b")]
#[command(about = "Backend service: random country names", long_about = None)]
pub struct ServiceBArgs {
    #[command(flatten)]
    pub server: ServerArgs,
}

/// Returns `/` for the root, otherwise `/segment[/...]` without trailing slashes.
pub fn normalize_base_path(input: &str) -> String {
    let inner = input.trim().trim_matches('/');
    if inner.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", inner)
    }
}

/// Checks that the backend address is an absolute http(s) URL.
pub fn parse_country_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim())
        .with_context(|| format!("Invalid country service URL: {}", input))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(anyhow!("Unsupported scheme for country service URL: {}", other)),
    }
    if url.host_str().is_none() {
        return Err(anyhow!("Country service URL has no host: {}", input));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_path_root() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("  /  "), "/");
        assert_eq!(normalize_base_path("//"), "/");
        assert_eq!(normalize_base_path("///"), "/");
    }

    #[test]
    fn test_normalize_base_path_slashes() {
        assert_eq!(normalize_base_path("service-a"), "/service-a");
        assert_eq!(normalize_base_path("/service-a/"), "/service-a");
        assert_eq!(normalize_base_path("/apps/service-a//"), "/apps/service-a");
        assert_eq!(normalize_base_path("//service-a"), "/service-a");
    }

    #[test]
    fn test_parse_country_url_default() {
        let url = parse_country_url(DEFAULT_COUNTRY_URL).unwrap();
        assert_eq!(url.host_str(), Some("serviceb.acc3.example.local"));
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.path(), "/country");
    }

    #[test]
    fn test_parse_country_url_rejects_bad_input() {
        assert!(parse_country_url("not a url").is_err());
        assert!(parse_country_url("ftp://serviceb/country").is_err());
        assert!(parse_country_url("/country").is_err());
    }

    #[test]
    fn test_service_a_args_defaults() {
        let args = ServiceAArgs::parse_from(["service-a"]);
        assert_eq!(args.country_url, DEFAULT_COUNTRY_URL);
    }

    #[test]
    fn test_service_b_args_override() {
        let args = ServiceBArgs::parse_from(["service-b", "--host", "127.0.0.1", "-p", "9090"]);
        assert_eq!(args.server.addr(), "127.0.0.1:9090");
    }
}
