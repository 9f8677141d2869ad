use crate::shared::clipboard::CopyFeedback;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Icon button copying `text`; shows a check mark for a moment afterwards
#[component]
pub fn CopyButton(
    #[prop(into)]
    text: String,
    /// Shared so only the last copied value on a page shows the check mark
    feedback: CopyFeedback,
    #[prop(optional, into)]
    title: MaybeProp<String>,
) -> impl IntoView {
    let key = StoredValue::new(text);
    let is_copied = move || key.with_value(|k| feedback.is_copied(k));

    view! {
        <button
            type="button"
            class="copy-button"
            title=move || title.get().unwrap_or_else(|| "Copy".to_string())
            on:click=move |ev| {
                ev.stop_propagation();
                key.with_value(|k| feedback.copy(k.clone(), k));
            }
        >
            {move || if is_copied() { icon("check") } else { icon("copy") }}
        </button>
    }
}
