use crate::shared::clipboard::CopyFeedback;
use crate::shared::components::ui::{Badge, SeverityBadge};
use crate::shared::components::CopyButton;
use crate::shared::date_utils::{format_date, format_percent};
use contracts::dashboards::d420_ioc_search::IocSearchResult;
use leptos::prelude::*;

#[component]
pub fn SearchResults(
    result: IocSearchResult,
    /// Called with the IOC value to enrich
    on_enrich: Callback<String>,
    copy_feedback: CopyFeedback,
) -> impl IntoView {
    let summary = format!(
        "{} results for \"{}\" in {:.0} ms",
        result.total_results, result.query, result.search_time_ms
    );
    let related = result.related_searches;

    view! {
        <div class="search-results">
            <div class="search-results__summary">{summary}</div>

            {if result.iocs.is_empty() {
                view! { <p class="panel__empty">"No IOCs found"</p> }.into_any()
            } else {
                view! {
                    <div class="ioc-list">
                        {result.iocs.into_iter().map(|ioc| {
                            let value = ioc.value.clone();
                            let seen = format!("{} - {}", format_date(&ioc.first_seen), format_date(&ioc.last_seen));
                            view! {
                                <div class="ioc-card" on:click=move |_| on_enrich.run(value.clone())>
                                    <div class="ioc-card__header">
                                        <code class="ioc-card__value">{ioc.value.clone()}</code>
                                        <CopyButton text=ioc.value feedback=copy_feedback />
                                        <Badge variant="outline">{ioc.ioc_type.display_name()}</Badge>
                                        <SeverityBadge severity=ioc.threat_level />
                                        <span class="ioc-card__confidence">
                                            {format!("{} confidence", format_percent(ioc.confidence))}
                                        </span>
                                    </div>
                                    <p class="ioc-card__description">{ioc.description}</p>
                                    <div class="ioc-card__meta">
                                        <span>"Seen: " {seen}</span>
                                        {(!ioc.threat_actors.is_empty()).then(|| view! {
                                            <span>"Actors: " {ioc.threat_actors.join(", ")}</span>
                                        })}
                                        {(!ioc.malware_families.is_empty()).then(|| view! {
                                            <span>"Malware: " {ioc.malware_families.join(", ")}</span>
                                        })}
                                        <span>"Sources: " {ioc.sources.join(", ")}</span>
                                    </div>
                                    <div class="tag-row">
                                        {ioc.tags.into_iter().map(|t| view! { <Badge>{t}</Badge> }).collect_view()}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            {(!related.is_empty()).then(|| view! {
                <div class="search-results__related">
                    <span class="form__label">"Related searches"</span>
                    <div class="tag-row">
                        {related.into_iter().map(|r| view! { <Badge variant="primary">{r}</Badge> }).collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}
