use crate::shared::api_utils::get_json_with_query;
use contracts::dashboards::d410_threat_timeline::{TimelineAnalysis, TimelineQuery};

/// Events, campaigns and insights for the selected window and filters
pub async fn get_timeline(query: &TimelineQuery) -> Result<TimelineAnalysis, String> {
    get_json_with_query("threat-timeline/events", query)
        .await
        .map_err(|e| e.to_string())
}
