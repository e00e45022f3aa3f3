use contracts::system::auth::{AdminSignUpRequest, MIN_PASSWORD_LEN};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::use_toast;
use crate::system::auth::api;

/// Admin registration. On success the user is sent back to the login form.
#[component]
pub fn SignUpPage(on_sign_in: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let toast = use_toast();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match AdminSignUpRequest::new(&name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                set_error_message.set(Some(message));
                return;
            }
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::admin_sign_up(&request).await {
                Ok(response) => {
                    let message = response
                        .message
                        .unwrap_or_else(|| "Account created. Please sign in.".to_string());
                    toast.success(message);
                    on_sign_in.run(());
                }
                Err(e) => {
                    let _ = set_error_message.try_set(Some(e.to_string()));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Shop Admin"</h1>
                <h2>"Create an admin account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="signup-email">"Email"</label>
                        <input
                            type="email"
                            id="signup-email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="signup-password">"Password"</label>
                        <input
                            type="password"
                            id="signup-password"
                            autocomplete="new-password"
                            placeholder=format!("At least {} characters", MIN_PASSWORD_LEN)
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"Already have an account? "</span>
                    <a href="#" on:click=move |e| {
                        e.prevent_default();
                        on_sign_in.run(());
                    }>"Sign in"</a>
                </div>
            </div>
        </div>
    }
}
