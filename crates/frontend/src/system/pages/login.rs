use contracts::system::auth::AdminLoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::use_toast;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage(
    /// Switches to the sign-up form.
    on_sign_up: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let toast = use_toast();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match AdminLoginRequest::new(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                set_error_message.set(Some(message));
                return;
            }
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::admin_login(&request).await {
                Ok(identity) => {
                    toast.success(format!("Welcome back, {}!", identity.name));
                    // Flips the auth gate to the main layout.
                    auth.login(identity);
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Shop Admin"</h1>
                <h2>"Welcome back! Sign in with your credentials."</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"No admin account yet? "</span>
                    <a href="#" on:click=move |e| {
                        e.prevent_default();
                        on_sign_up.run(());
                    }>"Sign up"</a>
                </div>
            </div>
        </div>
    }
}
