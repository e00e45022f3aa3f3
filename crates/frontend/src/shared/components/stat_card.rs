use crate::shared::icons::icon;
use leptos::prelude::*;

/// Counter card used on the dashboard and above the list tables.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] icon_name: String,
    /// Accent: "primary", "success", "warning", "error", "info".
    #[prop(optional, into)]
    accent: Option<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    let class = format!(
        "stat-card stat-card--{}",
        accent.unwrap_or_else(|| "primary".to_string())
    );

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
