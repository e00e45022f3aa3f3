use super::tab_bar::TabBar;
use leptos::prelude::*;

/// Tab strip on top, open tab pages below.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabBar />
            <div class="app-tabs__pages">
                {children()}
            </div>
        </div>
    }
}
