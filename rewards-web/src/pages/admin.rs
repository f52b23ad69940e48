//! Admin Panel Page - user list and withdrawals
//!
//! The list loads once per mount and is never refreshed after a withdrawal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_rewards::views::admin::{
    fetch_users, withdraw, AdminPanelState, WithdrawOutcome, WITHDRAW_BUTTON_LABEL,
};

use crate::services::{alert, api_client};

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = RwSignal::new(AdminPanelState::default());

    spawn_local(async move {
        let api = match api_client() {
            Ok(api) => api,
            Err(e) => {
                log::error!("Error fetching users: {}", e);
                return;
            }
        };

        // Failures are already logged; the list just stays empty
        if let Ok(users) = fetch_users(&api).await {
            state.try_update(|s| s.set_users(users));
        }
    });

    view! {
        <div>
            <h2>"Admin Panel"</h2>
            <h3>"Users"</h3>
            {move || {
                state
                    .with(|s| s.rows())
                    .into_iter()
                    .map(|row| {
                        let email = row.email;
                        view! {
                            <div>
                                <p>{row.label}</p>
                                <button on:click=move |_| start_withdraw(email.clone())>
                                    {WITHDRAW_BUTTON_LABEL}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn start_withdraw(email: String) {
    spawn_local(async move {
        let outcome = match api_client() {
            Ok(api) => withdraw(&api, &email).await,
            Err(e) => {
                log::error!("Withdrawal failed: {}", e);
                WithdrawOutcome::Failed
            }
        };
        alert(outcome.alert_message());
    });
}
