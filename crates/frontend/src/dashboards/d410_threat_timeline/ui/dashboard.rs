use super::campaigns::CampaignTable;
use super::event_list::EventList;
use crate::dashboards::d410_threat_timeline::api;
use crate::shared::components::ui::Select;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::date_utils::format_date;
use crate::shared::filter_options::{
    days_back_options, event_type_options, parse_days_back, severity_options, with_all,
};
use contracts::dashboards::d410_threat_timeline::{TimelineAnalysis, TimelineQuery, DEFAULT_DAYS_BACK};
use contracts::enums::Severity;
use contracts::shared::filter::FILTER_ALL;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner};

/// Threat timeline: recent events, campaigns and trend insights
#[component]
pub fn ThreatTimelineDashboard() -> impl IntoView {
    // Filters
    let days_back = RwSignal::new(DEFAULT_DAYS_BACK.to_string());
    let severity = RwSignal::new(FILTER_ALL.to_string());
    let event_type = RwSignal::new(FILTER_ALL.to_string());

    // Data state
    let (data, set_data) = signal(None::<TimelineAnalysis>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let latest_request = StoredValue::new(0u64);

    // Reload whenever a filter changes
    Effect::new(move |_| {
        let query = TimelineQuery::from_filters(
            parse_days_back(&days_back.get()),
            &severity.get(),
            &event_type.get(),
        );
        latest_request.update_value(|n| *n += 1);
        let request = latest_request.get_value();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_timeline(&query).await;
            if latest_request.try_get_value() != Some(request) {
                return;
            }
            match result {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load threat timeline: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let severity_filter = with_all("All Severities", severity_options(&Severity::all()));
    let event_filter = with_all("All Event Types", event_type_options());

    view! {
        <div class="dashboard">
            <PageHeader
                title="Threat Timeline"
                subtitle="Chronological view of detections, attacks and campaigns"
                icon_name="activity".to_string()
            >
                <div class="dashboard__filters">
                    <Select
                        value=days_back
                        options=days_back_options()
                        on_value_change=Callback::new(move |v| days_back.set(v))
                    />
                    <Select
                        value=severity
                        options=severity_filter
                        on_value_change=Callback::new(move |v| severity.set(v))
                    />
                    <Select
                        value=event_type
                        options=event_filter
                        on_value_change=Callback::new(move |v| event_type.set(v))
                    />
                </div>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {format!("Failed to load timeline: {}", err)}
                </MessageBar>
            })}

            <Show when=move || loading.get() && data.with(|d| d.is_none())>
                <div class="dashboard__loading"><Spinner /></div>
            </Show>

            {move || data.get().map(|analysis| {
                let total = analysis.total_events.to_string();
                let critical = analysis.count_by_severity(Severity::Critical);
                let campaigns = format!("{} / {}", analysis.active_campaigns(), analysis.campaigns.len());
                let range = format!(
                    "{} - {}",
                    format_date(&analysis.date_range.start),
                    format_date(&analysis.date_range.end),
                );
                let critical_tone = if critical > 0 { StatTone::Danger } else { StatTone::Good };
                let events = analysis.events_newest_first();
                let insights = analysis.attack_pattern_insights.clone();
                let trending = analysis.trending_threats.clone();

                view! {
                    <div class="stat-grid">
                        <StatCard label="Total Events" icon_name="activity" value=total subtitle=range />
                        <StatCard
                            label="Critical Events"
                            icon_name="alert-triangle"
                            value=critical.to_string()
                            tone=critical_tone
                        />
                        <StatCard label="Active / Total Campaigns" icon_name="target" value=campaigns />
                        <StatCard
                            label="Trending Threats"
                            icon_name="shield"
                            value=analysis.trending_threats.len().to_string()
                        />
                    </div>

                    <div class="dashboard__grid">
                        <section class="panel panel--wide">
                            <h2 class="panel__title">"Events"</h2>
                            <EventList events=events />
                        </section>

                        <section class="panel">
                            <h2 class="panel__title">"Attack Pattern Insights"</h2>
                            {if insights.is_empty() {
                                view! { <p class="panel__empty">"No insights for this period"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="insight-list">
                                        {insights.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}

                            <h2 class="panel__title">"Trending Threats"</h2>
                            <ul class="trend-list">
                                {trending.into_iter().map(|t| {
                                    let rising = t.trend == "increasing";
                                    let trend_class = if rising {
                                        "trend-list__trend trend-list__trend--up"
                                    } else {
                                        "trend-list__trend"
                                    };
                                    view! {
                                        <li class="trend-list__item">
                                            <span class="trend-list__name">{t.name}</span>
                                            <span class="trend-list__count">{t.count}</span>
                                            <span class=trend_class>
                                                {if rising { "\u{2191} increasing" } else { "stable" }}
                                            </span>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        </section>
                    </div>

                    <section class="panel">
                        <h2 class="panel__title">"Threat Campaigns"</h2>
                        <CampaignTable campaigns=analysis.campaigns />
                    </section>
                }
            })}
        </div>
    }
}
