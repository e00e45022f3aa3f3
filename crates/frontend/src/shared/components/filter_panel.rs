use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel with pagination in its header. The children are
/// the filter inputs shown when expanded.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Shown as a badge next to the title when non-zero.
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(into)] pagination_controls: ViewFn,
    /// Buttons on the right of the header (refresh, create).
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                {actions.map(|actions| view! {
                    <div class="filter-panel-header__right">{actions.run()}</div>
                })}
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
