use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    // A stored identity may belong to a cookie the backend already dropped.
    auth.verify_session();

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
