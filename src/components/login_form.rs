//! Login Form Component
//!
//! E-mail/password form feeding the session gate.

use leptos::prelude::*;
use todo_catalog_core::domain::Credentials;

use crate::context::use_todo_context;

#[component]
pub fn LoginForm(#[prop(into)] on_switch: Callback<()>) -> impl IntoView {
    let ctx = use_todo_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let loading = Memo::new(move |_| ctx.auth.with(|auth| auth.is_logging_in()));
    let error = Memo::new(move |_| ctx.auth.with(|auth| auth.error.clone()));
    let credentials = move || Credentials {
        email: email.get(),
        password: password.get(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = credentials();
        if credentials.is_complete() {
            ctx.login(credentials);
        }
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Welcome Back"</h2>
                <p class="auth-subtitle">"Sign in to access your todos"</p>

                {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                </div>

                <button
                    type="submit"
                    class="auth-button"
                    disabled=move || loading.get() || !credentials().is_complete()
                >
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <div class="auth-switch">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="link-button"
                        on:click=move |_| on_switch.run(())
                        disabled=move || loading.get()
                    >
                        "Sign up"
                    </button>
                </div>
            </form>
        </div>
    }
}
