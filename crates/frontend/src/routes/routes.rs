use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::tab_labels::DASHBOARD;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignUpPage;
use leptos::prelude::*;

/// Tabs of the signed-in app.
#[component]
fn TabPages() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <For
            each=move || tabs_store.opened.get()
            key=|tab| tab.key.clone()
            children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
        />
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Runs once per sign-in: reopens the tab from the URL or the dashboard.
    tabs_store.init_router_integration((DASHBOARD, "Dashboard"));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <TabPages /> }.into_any()
        />
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScreen {
    Login,
    SignUp,
}

/// Login and sign-up screens for guests, the tabbed app for admins.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();
    let screen = RwSignal::new(AuthScreen::Login);

    let auth_screens = move || match screen.get() {
        AuthScreen::Login => view! {
            <LoginPage on_sign_up=Callback::new(move |_| screen.set(AuthScreen::SignUp)) />
        }
        .into_any(),
        AuthScreen::SignUp => view! {
            <SignUpPage on_sign_in=Callback::new(move |_| screen.set(AuthScreen::Login)) />
        }
        .into_any(),
    };

    view! {
        <Show when=move || auth.is_authenticated() fallback=auth_screens>
            <RequireAdmin>
                <MainLayout />
            </RequireAdmin>
        </Show>
    }
}
