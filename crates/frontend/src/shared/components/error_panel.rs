use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Replaces page content when its primary data could not be loaded.
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-panel">
            <div class="error-panel__icon">{icon("alert-circle")}</div>
            {title.map(|t| view! { <h2 class="error-panel__title">{t}</h2> })}
            <div class="error-panel__message">{move || message.get()}</div>
            {on_retry.map(|retry| view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| retry.run(())>
                    {icon("refresh")}
                    " Retry"
                </Button>
            })}
        </div>
    }
}
