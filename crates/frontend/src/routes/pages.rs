use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-message">
            <h2 class="page-message__title">"Welcome to Cipher"</h2>
            <p class="page-message__text">
                "Cyber threat detection, attribution, and incident response platform."
            </p>
            <A href="/threat-timeline" attr:class="button button--primary">"View Threat Timeline"</A>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-message">
            <h2 class="page-message__title">"Page Not Found"</h2>
            <p class="page-message__text">"The page you're looking for doesn't exist."</p>
            <A href="/" attr:class="button button--primary">"Go Home"</A>
        </div>
    }
}
