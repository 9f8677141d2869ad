//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - One link per dashboard page (the current page is marked by the router)
//! - Theme selector

use crate::routes::NAV_LINKS;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use leptos::prelude::*;
use leptos_router::components::A;

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                <span class="top-header__logo">{icon("shield")}</span>
                <span class="top-header__title">"Cipher Threat Intelligence"</span>
            </div>

            <div class="top-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, title)| view! {
                        <A href=*href attr:class="top-header__link">{*title}</A>
                    })
                    .collect_view()}
            </div>

            <div class="top-header__actions">
                <ThemeSelector />
            </div>
        </nav>
    }
}
