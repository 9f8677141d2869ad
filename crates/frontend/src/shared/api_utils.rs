//! API utilities for frontend-backend communication
//!
//! One place resolves the API base URL; every dashboard goes through the
//! JSON helpers below.

use gloo_net::http::{Request, Response};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Used when `CIPHER_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

static API_BASE: Lazy<String> = Lazy::new(|| {
    let base = normalize_base(option_env!("CIPHER_API_BASE_URL"));
    log::info!("API base URL: {}", base);
    base
});

fn normalize_base(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.strip_prefix('/').unwrap_or(path))
}

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> &'static str {
    API_BASE.as_str()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/ioc/feeds");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

/// Percent-encode a value used as a single path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

/// Serialize a query struct; an empty struct gives an empty string
pub fn query_string<Q: Serialize>(query: &Q) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))
}

fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

/// Pull `detail` out of an error body, falling back to the raw text
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = match error_detail(&body) {
            m if m.is_empty() => response.status_text(),
            m => m,
        };
        return Err(ApiError::Status { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_url<T: DeserializeOwned>(url: String) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_url(api_url(path)).await
}

pub async fn get_json_with_query<T, Q>(path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let qs = query_string(query)?;
    get_url(with_query(api_url(path), &qs)).await
}

pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_threat_timeline::TimelineQuery;
    use contracts::dashboards::d420_ioc_search::IocSearchQuery;

    #[test]
    fn test_base_defaults_and_trims() {
        assert_eq!(normalize_base(None), DEFAULT_API_BASE);
        assert_eq!(normalize_base(Some("  ")), DEFAULT_API_BASE);
        assert_eq!(
            normalize_base(Some("https://intel.example.com/api//")),
            "https://intel.example.com/api"
        );
    }

    #[test]
    fn test_join_accepts_leading_slash() {
        let base = "http://localhost:8000/api";
        assert_eq!(join_url(base, "ioc/feeds"), "http://localhost:8000/api/ioc/feeds");
        assert_eq!(join_url(base, "/ioc/feeds"), "http://localhost:8000/api/ioc/feeds");
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment("Lazarus Group"), "Lazarus%20Group");
        assert_eq!(
            path_segment("http://evil.example/a?b=c"),
            "http%3A%2F%2Fevil.example%2Fa%3Fb%3Dc"
        );
    }

    #[test]
    fn test_timeline_query_omits_all() {
        let query = TimelineQuery::from_filters(30, "all", "attack");
        assert_eq!(query_string(&query).unwrap(), "days_back=30&event_type=attack");
    }

    #[test]
    fn test_ioc_query_encoding() {
        let query = IocSearchQuery::from_filters("evil.example", "domain", "high").unwrap();
        assert_eq!(
            query_string(&query).unwrap(),
            "query=evil.example&ioc_type=domain&threat_level=high&limit=50"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("http://h/api/x".to_string(), ""), "http://h/api/x");
        assert_eq!(with_query("http://h/api/x".to_string(), "a=1"), "http://h/api/x?a=1");
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(error_detail(r#"{"detail":"Technique not found"}"#), "Technique not found");
        assert_eq!(error_detail("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_detail(""), "");
    }
}
