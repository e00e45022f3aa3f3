use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabItem(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str())));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    // Title is read from the store so detail pages can rename their tab.
    let title = move || {
        key.with_value(|k| {
            tabs_store
                .opened
                .with(|tabs| tabs.iter().find(|t| &t.key == k).map(|t| t.title.clone()))
        })
        .unwrap_or_default()
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span class="tab__title">{title}</span>
            <button class="tab-close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <TabItem tab=tab /> }
            />
        </div>
    }
}
