use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / next / last buttons plus a page size picker.
///
/// Pages are 1-based. The caller clamps; the buttons only disable
/// themselves at the edges.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Length of the filtered list.
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    /// Omitted on pages with a fixed page size.
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50]);
    let at_start = move || current_page.get() <= 1;
    let at_end = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({} total)",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            {on_page_size_change.map(|on_size| {
                view! {
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                on_size.run(size);
                            }
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {page_size_opts.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {format!("{} / page", size)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                }
            })}
        </div>
    }
}
