use crate::shared::clipboard::CopyFeedback;
use crate::shared::components::ui::Badge;
use crate::shared::components::{CopyButton, ProgressBar, StatCard, StatTone};
use crate::shared::date_utils::{format_datetime, format_percent, format_thousands};
use contracts::dashboards::d420_ioc_search::{
    display_value, IocCorrelation, IocEnrichment, MalwareAnalysis,
};
use leptos::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;

/// Lower reputation is worse
fn reputation_tone(score: u32) -> StatTone {
    match score {
        0..=29 => StatTone::Danger,
        30..=69 => StatTone::Warning,
        _ => StatTone::Good,
    }
}

/// Share of malicious votes in percent
fn malicious_vote_percent(malicious: u32, harmless: u32) -> f64 {
    let total = malicious + harmless;
    if total == 0 {
        0.0
    } else {
        malicious as f64 * 100.0 / total as f64
    }
}

/// "country_code" -> "Country Code"
fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[component]
fn KeyValueBlock(title: &'static str, data: Option<BTreeMap<String, Value>>) -> impl IntoView {
    data.map(|entries| {
        view! {
            <section class="panel">
                <h3 class="panel__title">{title}</h3>
                <dl class="kv-list">
                    {entries.into_iter().map(|(k, v)| view! {
                        <dt>{humanize_key(&k)}</dt>
                        <dd>{display_value(&v)}</dd>
                    }).collect_view()}
                </dl>
            </section>
        }
    })
}

#[component]
fn MalwareBlock(analysis: MalwareAnalysis) -> impl IntoView {
    let rows: Vec<(&'static str, Option<String>)> = vec![
        ("Malware Family", analysis.malware_family),
        ("File Type", analysis.file_type),
        ("Size", analysis.size_bytes.map(|b| format!("{} bytes", format_thousands(b as i64)))),
        ("Sandbox", analysis.sandbox_environment),
        ("Analysed", analysis.analysis_date.map(|d| format_datetime(&d))),
    ];

    view! {
        <section class="panel">
            <h3 class="panel__title">"Malware Analysis"</h3>
            <dl class="kv-list">
                {rows.into_iter().filter_map(|(label, value)| value.map(|v| view! {
                    <dt>{label}</dt>
                    <dd>{v}</dd>
                })).collect_view()}
            </dl>
            <ListBlock title="Behaviors" items=analysis.behaviors />
            <ListBlock title="Network Indicators" items=analysis.network_indicators />
            <ListBlock title="Dropped Files" items=analysis.dropped_files />
            <div class="tag-row">
                {analysis.mitre_techniques.into_iter().map(|t| view! { <Badge variant="outline">{t}</Badge> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ListBlock(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="list-block">
                <h4 class="list-block__title">{title}</h4>
                <ul>
                    {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
fn CorrelationBlock(correlation: IocCorrelation, copy_feedback: CopyFeedback) -> impl IntoView {
    view! {
        <section class="panel">
            <h3 class="panel__title">
                "Correlation "
                <span class="panel__hint">
                    {format!("{} ({} score)", correlation.relationship_type, format_percent(correlation.correlation_score))}
                </span>
            </h3>
            <ul class="related-list">
                {correlation.related_iocs.into_iter().map(|r| view! {
                    <li class="related-list__item">
                        <code>{r.ioc_value.clone()}</code>
                        <CopyButton text=r.ioc_value feedback=copy_feedback />
                        <Badge variant="outline">{r.ioc_type.display_name()}</Badge>
                        <span class="related-list__relationship">{r.relationship}</span>
                        <span>{format_percent(r.correlation_score)}</span>
                        <span class="related-list__attrs">{r.shared_attributes.join(", ")}</span>
                    </li>
                }).collect_view()}
            </ul>
            <h4 class="list-block__title">"Timeline"</h4>
            <ol class="event-list event-list--compact">
                {correlation.timeline.into_iter().map(|e| view! {
                    <li class="event-list__item">
                        <div class="event-list__marker"></div>
                        <div class="event-list__body">
                            <div class="event-list__meta">
                                <span>{format_datetime(&e.timestamp)}</span>
                                <span>{e.event_type}</span>
                            </div>
                            <p class="event-list__description">{e.description}</p>
                        </div>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}

/// Full enrichment view for one IOC plus its correlations
#[component]
pub fn EnrichmentPanel(
    enrichment: IocEnrichment,
    correlation: Option<IocCorrelation>,
    copy_feedback: CopyFeedback,
) -> impl IntoView {
    let (malicious, harmless) = enrichment.vote_split();
    let intel = enrichment.threat_intelligence.clone();
    let detections = format!(
        "{} / {}",
        intel.detections.positive_detections, intel.detections.total_engines
    );
    let tone = reputation_tone(enrichment.reputation_score);

    view! {
        <div class="enrichment">
            <div class="enrichment__header">
                <code class="enrichment__value">{enrichment.ioc_value.clone()}</code>
                <CopyButton text=enrichment.ioc_value.clone() feedback=copy_feedback />
                <Badge variant="outline">{enrichment.ioc_type.display_name()}</Badge>
                {(!intel.verdict.is_empty()).then(|| view! {
                    <Badge variant="error">{intel.verdict.clone()}</Badge>
                })}
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Reputation Score"
                    icon_name="shield"
                    value=format!("{}/100", enrichment.reputation_score)
                    tone=tone
                />
                <StatCard
                    label="Engine Detections"
                    icon_name="alert-triangle"
                    value=detections
                    subtitle=intel.detections.detection_rate.clone()
                />
                <StatCard
                    label="Community Votes"
                    icon_name="users"
                    value=format!("{} malicious / {} harmless", malicious, harmless)
                />
            </div>

            <section class="panel">
                <h3 class="panel__title">"Community Verdict"</h3>
                <ProgressBar value=malicious_vote_percent(malicious, harmless) color="#dc2626".to_string() />
                <div class="tag-row">
                    {intel.threat_categories.into_iter().map(|c| view! { <Badge variant="warning">{c}</Badge> }).collect_view()}
                </div>
                {intel.last_analysis_date.map(|d| view! {
                    <div class="panel__hint">"Last analysis " {format_datetime(&d)}</div>
                })}
            </section>

            <div class="dashboard__grid">
                <KeyValueBlock title="Geolocation" data=enrichment.geolocation />
                <KeyValueBlock title="WHOIS" data=enrichment.whois_data />
            </div>

            {enrichment.malware_analysis.map(|analysis| view! { <MalwareBlock analysis=analysis /> })}

            <section class="panel">
                <ListBlock title="Related IOCs" items=enrichment.related_iocs />
                <ListBlock title="Detection Rules" items=enrichment.detection_rules />
                <ListBlock title="Recommendations" items=enrichment.recommendations />
            </section>

            {correlation.map(|c| view! { <CorrelationBlock correlation=c copy_feedback=copy_feedback /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reputation_tone_bands() {
        assert_eq!(reputation_tone(5), StatTone::Danger);
        assert_eq!(reputation_tone(30), StatTone::Warning);
        assert_eq!(reputation_tone(69), StatTone::Warning);
        assert_eq!(reputation_tone(95), StatTone::Good);
    }

    #[test]
    fn test_malicious_vote_percent() {
        assert_eq!(malicious_vote_percent(0, 0), 0.0);
        assert_eq!(malicious_vote_percent(3, 1), 75.0);
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("country_code"), "Country Code");
        assert_eq!(humanize_key("asn"), "Asn");
        assert_eq!(humanize_key("registrar"), "Registrar");
    }
}
