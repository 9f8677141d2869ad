use super::pages::{HomePage, NotFoundPage};
use crate::dashboards::{
    IocSearchDashboard, IrPlaybookDashboard, MitreAttackDashboard, ThreatTimelineDashboard,
};
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// `(href, title)` of every page in the top navigation, in display order
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/threat-timeline", "Threat Timeline"),
    ("/ioc-search", "IOC Search"),
    ("/mitre-attack", "MITRE ATT&CK"),
    ("/ir-playbooks", "IR Playbooks"),
];

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/threat-timeline") view=ThreatTimelineDashboard />
                    <Route path=path!("/ioc-search") view=IocSearchDashboard />
                    <Route path=path!("/mitre-attack") view=MitreAttackDashboard />
                    <Route path=path!("/ir-playbooks") view=IrPlaybookDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_are_absolute_and_unique() {
        let hrefs: std::collections::HashSet<_> = NAV_LINKS.iter().map(|(h, _)| *h).collect();
        assert_eq!(hrefs.len(), NAV_LINKS.len());
        assert!(NAV_LINKS.iter().all(|(h, _)| h.starts_with('/') && *h != "/"));
    }
}
