use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_datetime, format_thousands};
use contracts::dashboards::d420_ioc_search::IocFeed;
use leptos::prelude::*;

fn reliability_variant(reliability: &str) -> &'static str {
    match reliability {
        "excellent" => "success",
        "good" => "primary",
        "moderate" => "warning",
        _ => "neutral",
    }
}

/// Threat feed overview shown before the first search
#[component]
pub fn FeedCards(feeds: Vec<IocFeed>) -> impl IntoView {
    view! {
        <div class="feed-grid">
            {feeds.into_iter().map(|feed| view! {
                <div class="feed-card">
                    <div class="feed-card__header">
                        <span class="feed-card__name">{feed.feed_name}</span>
                        <Badge variant=reliability_variant(&feed.feed_reliability)>
                            {feed.feed_reliability.clone()}
                        </Badge>
                    </div>
                    <dl class="feed-card__stats">
                        <dt>"Total IOCs"</dt>
                        <dd>{format_thousands(feed.total_iocs as i64)}</dd>
                        <dt>"New (24h)"</dt>
                        <dd>{format_thousands(feed.new_iocs_24h as i64)}</dd>
                        <dt>"Critical"</dt>
                        <dd class="feed-card__critical">{format_thousands(feed.critical_iocs as i64)}</dd>
                    </dl>
                    <div class="feed-card__updated">"Updated " {format_datetime(&feed.last_updated)}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reliability_variant() {
        assert_eq!(reliability_variant("excellent"), "success");
        assert_eq!(reliability_variant("moderate"), "warning");
        assert_eq!(reliability_variant("unknown"), "neutral");
    }
}
