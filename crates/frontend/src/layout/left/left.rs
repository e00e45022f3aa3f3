use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible sidebar column holding the section menu.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside data-zone="left" class="left app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__heading">
                {icon("list")}
                <span>"Menu"</span>
            </div>
            <nav class="app-sidebar__nav">{children()}</nav>
        </aside>
    }
}
