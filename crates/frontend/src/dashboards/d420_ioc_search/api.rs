use crate::shared::api_utils::{get_json, get_json_with_query, path_segment, post_json};
use contracts::dashboards::d420_ioc_search::{
    BulkCheckResponse, IocCorrelation, IocEnrichment, IocFeed, IocSearchQuery, IocSearchResult,
};

pub async fn search_iocs(query: &IocSearchQuery) -> Result<IocSearchResult, String> {
    get_json_with_query("ioc/search", query)
        .await
        .map_err(|e| e.to_string())
}

/// Reputation, WHOIS, geolocation and sandbox data for one IOC
pub async fn enrich_ioc(value: &str) -> Result<IocEnrichment, String> {
    get_json(&format!("ioc/enrich/{}", path_segment(value)))
        .await
        .map_err(|e| e.to_string())
}

pub async fn correlate_ioc(value: &str) -> Result<IocCorrelation, String> {
    get_json(&format!("ioc/correlate/{}", path_segment(value)))
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_feeds() -> Result<Vec<IocFeed>, String> {
    get_json("ioc/feeds").await.map_err(|e| e.to_string())
}

/// Check a batch of raw IOC values against all feeds
pub async fn bulk_check(iocs: &[String]) -> Result<BulkCheckResponse, String> {
    post_json("ioc/bulk-check", &iocs)
        .await
        .map_err(|e| e.to_string())
}
