//! Navigation menu. Items open (or focus) their tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{BANNERS, CATEGORIES, DASHBOARD, ORDERS, PRODUCTS, USERS};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![(PRODUCTS, "products"), (CATEGORIES, "tag")],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "orders",
            items: vec![(ORDERS, "orders")],
        },
        MenuGroup {
            id: "content",
            label: "Content",
            icon: "image",
            items: vec![(BANNERS, "image")],
        },
        MenuGroup {
            id: "customers",
            label: "Customers",
            icon: "users",
            items: vec![(USERS, "users")],
        },
    ]
}

#[component]
fn MenuItem(key: &'static str, icon_name: &'static str, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let label = tab_label_for_key(key);
    let label_for_click = label.clone();

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
            style:padding-left={if nested { "10px" } else { "12px" }}
            on:click=move |_| ctx.open_tab(key, &label_for_click)
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let expanded_groups = RwSignal::new(
        menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    let toggle_group = move |id: &'static str| {
        expanded_groups.update(|groups| {
            if let Some(pos) = groups.iter().position(|g| g == id) {
                groups.remove(pos);
            } else {
                groups.push(id.to_string());
            }
        });
    };

    view! {
        <div class="app-sidebar__content">
            <MenuItem key=DASHBOARD icon_name="dashboard" />

            {menu_groups()
                .into_iter()
                .map(|group| {
                    let id = group.id;
                    let is_expanded = move || expanded_groups.with(|g| g.iter().any(|x| x == id));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| toggle_group(id)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|(key, icon_name)| view! {
                                            <MenuItem key=*key icon_name=*icon_name nested=true />
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
