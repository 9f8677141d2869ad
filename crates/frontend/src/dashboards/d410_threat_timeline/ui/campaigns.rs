use crate::shared::components::ui::{Badge, SeverityBadge};
use crate::shared::date_utils::{format_date, format_percent};
use contracts::dashboards::d410_threat_timeline::ThreatCampaign;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

#[component]
pub fn CampaignTable(campaigns: Vec<ThreatCampaign>) -> impl IntoView {
    if campaigns.is_empty() {
        return view! { <p class="panel__empty">"No campaigns observed"</p> }.into_any();
    }

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Campaign"</TableHeaderCell>
                    <TableHeaderCell>"Threat Actor"</TableHeaderCell>
                    <TableHeaderCell>"Period"</TableHeaderCell>
                    <TableHeaderCell>"Events"</TableHeaderCell>
                    <TableHeaderCell>"Severity"</TableHeaderCell>
                    <TableHeaderCell>"Targeted Sectors"</TableHeaderCell>
                    <TableHeaderCell>"Success Rate"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {campaigns.into_iter().map(|c| {
                    let active = c.is_active();
                    let period = match &c.end_date {
                        Some(end) => format!("{} - {}", format_date(&c.start_date), format_date(end)),
                        None => format!("{} - now", format_date(&c.start_date)),
                    };
                    view! {
                        <TableRow>
                            <TableCell>
                                {c.name}
                                {active.then(|| view! { <Badge variant="error" class="badge--inline">"Active"</Badge> })}
                            </TableCell>
                            <TableCell>{c.threat_actor}</TableCell>
                            <TableCell>{period}</TableCell>
                            <TableCell>{c.total_events}</TableCell>
                            <TableCell><SeverityBadge severity=c.severity /></TableCell>
                            <TableCell>{c.targeted_sectors.join(", ")}</TableCell>
                            <TableCell>{format_percent(c.success_rate)}</TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}
