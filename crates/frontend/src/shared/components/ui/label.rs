use leptos::prelude::*;

/// Form label
#[component]
pub fn Label(
    /// ID of the labelled control
    #[prop(optional, into)]
    for_id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <label
            class=move || format!("form__label {}", additional_class())
            for=move || for_id.get().unwrap_or_default()
        >
            {children()}
        </label>
    }
}
