//! Top bar: sidebar toggle, app title, signed-in admin and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();
    let toasts = use_toast();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(auth).await;
            ctx.close_all();
            toasts.info("Signed out");
        });
    };

    let admin_name = move || {
        auth.identity()
            .map(|u| if u.name.trim().is_empty() { u.email } else { u.name })
            .unwrap_or_else(|| "Admin".to_string())
    };
    let initials = move || auth.identity().map(|u| u.initials()).unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Shop Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__avatar">{initials}</span>
                    <span>{admin_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
