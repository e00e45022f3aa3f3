use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for a signed-in admin.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.identity().map(|u| u.is_admin()).unwrap_or(false)
            fallback=|| view! { <div class="alert alert--error">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
