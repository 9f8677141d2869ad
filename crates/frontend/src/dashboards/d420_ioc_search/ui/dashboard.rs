use super::bulk_check::BulkCheckPanel;
use super::enrichment::EnrichmentPanel;
use super::feeds::FeedCards;
use super::search_results::SearchResults;
use crate::dashboards::d420_ioc_search::api;
use crate::shared::clipboard::CopyFeedback;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::filter_options::{ioc_type_options, severity_options, with_all};
use contracts::dashboards::d420_ioc_search::{
    IocCorrelation, IocEnrichment, IocFeed, IocSearchQuery, IocSearchResult,
};
use contracts::enums::Severity;
use contracts::shared::filter::FILTER_ALL;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner, Tab, TabList};

/// Quiet period before a filter change re-runs the search
pub const FILTER_DEBOUNCE_MS: u32 = 300;

const TAB_SEARCH: &str = "search";
const TAB_ENRICHMENT: &str = "enrichment";
const TAB_BULK: &str = "bulk";

/// IOC search, enrichment and bulk reputation checks
#[component]
pub fn IocSearchDashboard() -> impl IntoView {
    // Search form
    let query = RwSignal::new(String::new());
    let ioc_type = RwSignal::new(FILTER_ALL.to_string());
    let threat_level = RwSignal::new(FILTER_ALL.to_string());

    // Data state
    let (feeds, set_feeds) = signal(Vec::<IocFeed>::new());
    let (results, set_results) = signal(None::<IocSearchResult>);
    let (searching, set_searching) = signal(false);
    let (enrichment, set_enrichment) = signal(None::<IocEnrichment>);
    let (correlation, set_correlation) = signal(None::<IocCorrelation>);
    let (enriching, set_enriching) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let active_tab = RwSignal::new(TAB_SEARCH.to_string());
    let copy_feedback = CopyFeedback::new();
    let pending_search = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || pending_search.dispose());

    // Load feeds on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_feeds().await {
                Ok(list) => set_feeds.set(list),
                Err(e) => log::error!("Failed to load IOC feeds: {}", e),
            }
        });
    });

    let run_search = move || {
        let Some(search) = IocSearchQuery::from_filters(
            &query.get_untracked(),
            &ioc_type.get_untracked(),
            &threat_level.get_untracked(),
        ) else {
            return;
        };
        set_searching.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::search_iocs(&search).await {
                Ok(result) => {
                    set_results.set(Some(result));
                    active_tab.set(TAB_SEARCH.to_string());
                }
                Err(e) => {
                    log::error!("IOC search failed: {}", e);
                    set_error.set(Some(format!("Search failed: {}", e)));
                }
            }
            set_searching.set(false);
        });
    };

    let search_now = move || {
        pending_search.set_value(None);
        run_search();
    };

    // Only the last filter change within the quiet period triggers a search
    let on_filter_change = move |target: RwSignal<String>, value: String| {
        target.set(value);
        if results.with_untracked(|r| r.is_some()) {
            pending_search.set_value(Some(Timeout::new(FILTER_DEBOUNCE_MS, run_search)));
        }
    };

    let enrich = move |value: String| {
        set_enriching.set(true);
        set_error.set(None);

        spawn_local(async move {
            let (enriched, correlated) =
                futures::join!(api::enrich_ioc(&value), api::correlate_ioc(&value));
            match enriched {
                Ok(data) => {
                    set_enrichment.set(Some(data));
                    active_tab.set(TAB_ENRICHMENT.to_string());
                }
                Err(e) => {
                    log::error!("IOC enrichment failed for {}: {}", value, e);
                    set_error.set(Some(format!("Enrichment failed: {}", e)));
                }
            }
            match correlated {
                Ok(data) => set_correlation.set(Some(data)),
                Err(e) => {
                    log::warn!("IOC correlation failed for {}: {}", value, e);
                    set_correlation.set(None);
                }
            }
            set_enriching.set(false);
        });
    };

    let type_filter = with_all("All Types", ioc_type_options());
    let level_filter = with_all("All Threat Levels", severity_options(&Severity::threat_levels()));

    view! {
        <div class="dashboard">
            <PageHeader
                title="IOC Search & Enrichment"
                subtitle="Search indicators of compromise across threat feeds"
                icon_name="search"
            />

            <section class="panel">
                <div class="search-form">
                    <Input
                        class="search-form__query"
                        value=query
                        on_input=Callback::new(move |v| query.set(v))
                        on_submit=Callback::new(move |_| search_now())
                        placeholder="IP address, domain, hash, email or URL"
                    />
                    <Select
                        value=ioc_type
                        options=type_filter
                        on_value_change=Callback::new(move |v| on_filter_change(ioc_type, v))
                    />
                    <Select
                        value=threat_level
                        options=level_filter
                        on_value_change=Callback::new(move |v| on_filter_change(threat_level, v))
                    />
                    <Button
                        loading=searching
                        disabled=Signal::derive(move || query.with(|q| q.trim().is_empty()))
                        on_click=Callback::new(move |_| search_now())
                    >
                        "Search"
                    </Button>
                </div>
            </section>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <TabList selected_value=active_tab>
                <Tab value=TAB_SEARCH>"Search Results"</Tab>
                <Tab value=TAB_ENRICHMENT>"Enrichment"</Tab>
                <Tab value=TAB_BULK>"Bulk Check"</Tab>
            </TabList>

            <div class="tab-content">
                {move || match active_tab.get().as_str() {
                    TAB_ENRICHMENT => {
                        if enriching.get() {
                            view! { <div class="dashboard__loading"><Spinner /></div> }.into_any()
                        } else if let Some(data) = enrichment.get() {
                            view! {
                                <EnrichmentPanel
                                    enrichment=data
                                    correlation=correlation.get()
                                    copy_feedback=copy_feedback
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <p class="panel__empty">"Select an IOC from the search results to enrich it"</p>
                            }
                                .into_any()
                        }
                    }
                    TAB_BULK => view! { <BulkCheckPanel /> }.into_any(),
                    _ => match results.get() {
                        Some(result) => view! {
                            <SearchResults
                                result=result
                                on_enrich=Callback::new(enrich)
                                copy_feedback=copy_feedback
                            />
                        }
                            .into_any(),
                        None => view! {
                            <FeedCards feeds=feeds.get() />
                        }
                            .into_any(),
                    },
                }}
            </div>
        </div>
    }
}
