use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (gmail, set_gmail) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let gmail_val = gmail.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(session, gmail_val, password_val).await {
                Ok(()) => {
                    // Session signal flips, which switches to the shell
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Restaurant Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="gmail">"Email"</label>
                        <input
                            type="email"
                            id="gmail"
                            placeholder="you@example.com"
                            value=move || gmail.get()
                            on:input=move |ev| set_gmail.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
