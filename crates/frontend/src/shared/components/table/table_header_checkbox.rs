//! "Select all" checkbox for a table header.
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || header_state_for(&selection.get(), &visible_ids.get()))
//!     on_change=Callback::new(move |check_all: bool| select_page(check_all))
//! />
//! ```

use contracts::shared::list_query::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

/// Three-state checkbox. Affects only the rows of the rendered page.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] state: Signal<HeaderCheckState>,
    /// `true` selects every visible row, `false` clears them.
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` has no HTML attribute, only a DOM property.
    Effect::new(move |_| {
        let indeterminate = matches!(state.get(), HeaderCheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), HeaderCheckState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
