//! Signup Form Component
//!
//! Name/e-mail/password form; a completed signup logs the user in.

use leptos::prelude::*;
use todo_catalog_core::domain::SignupForm as SignupFields;

use crate::context::use_todo_context;

#[component]
pub fn SignupForm(#[prop(into)] on_switch: Callback<()>) -> impl IntoView {
    let ctx = use_todo_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let loading = Memo::new(move |_| ctx.auth.with(|auth| auth.is_logging_in()));
    let error = Memo::new(move |_| ctx.auth.with(|auth| auth.error.clone()));
    let fields = move || SignupFields {
        name: name.get(),
        email: email.get(),
        password: password.get(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = fields();
        if fields.is_complete() {
            ctx.signup(fields);
        }
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Create Account"</h2>
                <p class="auth-subtitle">"Sign up to start tracking your todos"</p>

                {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                </div>

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
                        placeholder="Choose a password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                </div>

                <button
                    type="submit"
                    class="auth-button"
                    disabled=move || loading.get() || !fields().is_complete()
                >
                    {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
                </button>

                <div class="auth-switch">
                    "Already have an account? "
                    <button
                        type="button"
                        class="link-button"
                        on:click=move |_| on_switch.run(())
                        disabled=move || loading.get()
                    >
                        "Sign in"
                    </button>
                </div>
            </form>
        </div>
    }
}
