use crate::shared::components::ui::{Badge, SeverityBadge};
use crate::shared::date_utils::format_datetime;
use contracts::dashboards::d410_threat_timeline::ThreatEvent;
use leptos::prelude::*;

fn status_variant(status: &str) -> &'static str {
    match status {
        "ongoing" => "error",
        "investigating" => "warning",
        "mitigated" | "resolved" => "success",
        _ => "neutral",
    }
}

#[component]
pub fn EventList(events: Vec<ThreatEvent>) -> impl IntoView {
    if events.is_empty() {
        return view! { <p class="panel__empty">"No events match the current filters"</p> }.into_any();
    }

    view! {
        <ol class="event-list">
            {events.into_iter().map(|event| {
                let actor = event.threat_actor.clone();
                let vector = event.attack_vector.clone();
                view! {
                    <li class="event-list__item">
                        <div class="event-list__marker"></div>
                        <div class="event-list__body">
                            <div class="event-list__header">
                                <SeverityBadge severity=event.severity />
                                <span class="event-list__title">{event.title}</span>
                                <Badge variant=status_variant(&event.status)>{event.status.clone()}</Badge>
                            </div>
                            <div class="event-list__meta">
                                <span>{format_datetime(&event.timestamp)}</span>
                                <span>{event.event_type}</span>
                                {actor.map(|a| view! { <span>"Actor: " {a}</span> })}
                                {vector.map(|v| view! { <span>"Vector: " {v}</span> })}
                            </div>
                            <p class="event-list__description">{event.description}</p>
                            <div class="tag-row">
                                {event.mitre_tactics.into_iter().map(|t| view! {
                                    <Badge variant="outline">{t}</Badge>
                                }).collect_view()}
                            </div>
                            {(!event.iocs.is_empty()).then(|| view! {
                                <div class="event-list__iocs">
                                    {event.iocs.into_iter().map(|ioc| view! { <code>{ioc}</code> }).collect_view()}
                                </div>
                            })}
                        </div>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("ongoing"), "error");
        assert_eq!(status_variant("resolved"), "success");
        assert_eq!(status_variant("queued"), "neutral");
    }
}
