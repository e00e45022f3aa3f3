//! Clickable column header with a sort arrow.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     current_sort=Signal::derive(move || sort.get())
//!     on_sort=Callback::new(move |field: String| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] sort_field: String,
    /// Active sort of the page, `None` for server order.
    #[prop(into)]
    current_sort: Signal<Option<SortState>>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
    /// "left" or "right"; numeric columns align right.
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || current_sort.with(|s| get_sort_class(s.as_ref(), &sort_field))>
                    {move || current_sort.with(|s| get_sort_indicator(s.as_ref(), &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
