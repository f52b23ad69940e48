//! Login Page - email/password form
//!
//! No validation happens here; whatever is typed is posted. On success the
//! email becomes the session user, on failure an error line appears.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_rewards::views::login::{authenticate, LoginForm, LoginOutcome};

use crate::services::api_client;
use crate::state::session::use_session_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_ctx = use_session_context();
    let form = RwSignal::new(LoginForm::new());

    let on_submit = move |_| {
        let (mode, credentials) = form.with_untracked(|f| (f.mode, f.credentials()));

        spawn_local(async move {
            let outcome = match api_client() {
                Ok(api) => authenticate(&api, mode, credentials).await,
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    LoginOutcome::Rejected(e.to_string())
                }
            };

            // Session lives above the page, so it updates even if the page is gone
            session_ctx
                .session
                .update(|session| outcome.apply_to_session(session));
            form.try_update(|f| f.record(&outcome));
        });
    };

    let on_toggle_mode = move |_| form.update(|f| f.mode = f.mode.toggled());

    view! {
        <div>
            <h2>{move || form.with(|f| f.mode.label())}</h2>

            {move || {
                form.with(|f| f.error().map(str::to_string))
                    .map(|error| view! { <p style="color: red;">{error}</p> })
            }}

            <input
                type="email"
                placeholder="Email"
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
            <button on:click=on_submit>{move || form.with(|f| f.mode.label())}</button>
            <button on:click=on_toggle_mode>
                {move || form.with(|f| format!("Switch to {}", f.mode.toggled().label()))}
            </button>
        </div>
    }
}
