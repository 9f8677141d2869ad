use crate::routes::AppRoutes;
use crate::shared::theme::{ThawThemeBridge, ThemeProvider};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <ThawThemeBridge>
                <AppRoutes />
            </ThawThemeBridge>
        </ThemeProvider>
    }
}
