use crate::dashboards::d420_ioc_search::api;
use crate::shared::components::ui::{Badge, Button, SeverityBadge, Textarea};
use crate::shared::components::{StatCard, StatTone};
use crate::shared::date_utils::format_percent;
use contracts::dashboards::d420_ioc_search::{
    parse_bulk_iocs, BulkCheckResponse, BulkCheckResult, BULK_CHECK_LIMIT,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    MessageBar, MessageBarIntent, Table, TableBody, TableCell, TableHeader, TableHeaderCell,
    TableRow,
};

/// IOC values to submit: at most the API limit
fn prepare_batch(text: &str) -> (Vec<String>, usize) {
    let mut iocs = parse_bulk_iocs(text);
    let dropped = iocs.len().saturating_sub(BULK_CHECK_LIMIT);
    iocs.truncate(BULK_CHECK_LIMIT);
    (iocs, dropped)
}

/// Text columns of a result row: IOC, type, feed count, confidence
fn result_columns(result: &BulkCheckResult) -> [String; 4] {
    [
        result.ioc.clone(),
        result.ioc_type.display_name().to_string(),
        result.found_in_feeds.to_string(),
        format_percent(result.confidence),
    ]
}

#[component]
fn ThreatLevelCell(result: BulkCheckResult) -> impl IntoView {
    match result.severity() {
        Some(severity) => view! { <SeverityBadge severity=severity /> }.into_any(),
        None if result.is_clean() => view! { <Badge variant="success">"clean"</Badge> }.into_any(),
        None => view! { <Badge>{result.threat_level}</Badge> }.into_any(),
    }
}

/// Paste a list of IOCs, one per line, and check them in one request
#[component]
pub fn BulkCheckPanel() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let (response, set_response) = signal(None::<BulkCheckResponse>);
    let (checking, set_checking) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    let line_count = move || input.with(|t| parse_bulk_iocs(t).len());

    let run_check = move || {
        let (iocs, dropped) = input.with_untracked(|t| prepare_batch(t));
        if iocs.is_empty() {
            return;
        }
        set_notice.set((dropped > 0).then(|| {
            format!("Only the first {} IOCs are checked, {} skipped", BULK_CHECK_LIMIT, dropped)
        }));
        set_checking.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::bulk_check(&iocs).await {
                Ok(data) => set_response.set(Some(data)),
                Err(e) => {
                    log::error!("Bulk IOC check failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_checking.set(false);
        });
    };

    view! {
        <div class="bulk-check">
            <section class="panel">
                <Textarea
                    label="IOCs (one per line)"
                    value=input
                    on_input=Callback::new(move |v| input.set(v))
                    placeholder="185.220.101.45\nmalicious-domain.example\n44d88612fea8a8f36de82e1278abb02f"
                    rows=8
                />
                <div class="bulk-check__actions">
                    <span class="panel__hint">{move || format!("{} IOCs", line_count())}</span>
                    <Button
                        loading=checking
                        disabled=Signal::derive(move || line_count() == 0)
                        on_click=Callback::new(move |_| run_check())
                    >
                        "Check All"
                    </Button>
                </div>
            </section>

            {move || notice.get().map(|n| view! {
                <MessageBar intent=MessageBarIntent::Warning>{n}</MessageBar>
            })}
            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{format!("Bulk check failed: {}", err)}</MessageBar>
            })}

            {move || response.get().map(|data| view! {
                <div class="stat-grid">
                    <StatCard label="Checked" icon_name="database" value=data.total_checked.to_string() />
                    <StatCard
                        label="Malicious"
                        icon_name="alert-triangle"
                        value=data.malicious_count.to_string()
                        tone=StatTone::Danger
                    />
                    <StatCard
                        label="Suspicious"
                        icon_name="search"
                        value=data.suspicious_count.to_string()
                        tone=StatTone::Warning
                    />
                    <StatCard
                        label="Clean"
                        icon_name="shield"
                        value=data.clean_count.to_string()
                        tone=StatTone::Good
                    />
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"IOC"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Threat Level"</TableHeaderCell>
                            <TableHeaderCell>"Feeds"</TableHeaderCell>
                            <TableHeaderCell>"Confidence"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {data.results.into_iter().map(|r| {
                            let [ioc, type_name, feeds, confidence] = result_columns(&r);
                            view! {
                                <TableRow>
                                    <TableCell><code>{ioc}</code></TableCell>
                                    <TableCell>{type_name}</TableCell>
                                    <TableCell><ThreatLevelCell result=r /></TableCell>
                                    <TableCell>{feeds}</TableCell>
                                    <TableCell>{confidence}</TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{IocType, Severity};

    #[test]
    fn test_prepare_batch_caps_at_limit() {
        let text = (0..120).map(|i| format!("10.0.0.{}", i)).collect::<Vec<_>>().join("\n");
        let (iocs, dropped) = prepare_batch(&text);
        assert_eq!(iocs.len(), BULK_CHECK_LIMIT);
        assert_eq!(dropped, 20);
        assert_eq!(iocs[0], "10.0.0.0");
    }

    #[test]
    fn test_prepare_batch_small_input() {
        let (iocs, dropped) = prepare_batch("  evil.example \n\n1.2.3.4\n");
        assert_eq!(iocs, vec!["evil.example", "1.2.3.4"]);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_result_columns_leave_result_usable() {
        let result = BulkCheckResult {
            ioc: "185.220.101.5".to_string(),
            ioc_type: IocType::Ip,
            threat_level: "high".to_string(),
            found_in_feeds: 3,
            confidence: 0.873,
        };

        let columns = result_columns(&result);

        assert_eq!(columns, ["185.220.101.5", "IP Address", "3", "87%"]);
        assert_eq!(result.severity(), Some(Severity::High));
    }
}
