//! Dashboard Page - balance, referral code and ads
//!
//! Refetches whenever the session user changes. Errors go to the console only;
//! whatever loaded before the failure stays on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_rewards::views::dashboard::{refresh, DashboardState};

use crate::services::api_client;
use crate::state::session::use_session_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_ctx = use_session_context();
    let state = RwSignal::new(DashboardState::default());

    // Only notifies when the email itself changes
    let user = Memo::new(move |_| session_ctx.user());

    Effect::new(move |_| {
        let Some(user) = user.get() else {
            log::debug!("Dashboard opened without a session, nothing to fetch");
            return;
        };

        spawn_local(async move {
            let api = match api_client() {
                Ok(api) => api,
                Err(e) => {
                    log::error!("Error fetching data: {}", e);
                    return;
                }
            };

            let mut rng = rand::rng();
            let result = refresh(&api, &user, &mut rng, |update| {
                // The page may have been left while the request was in flight
                state.try_update(|s| s.apply(update));
            })
            .await;

            if let Err(e) = result {
                log::error!("Error fetching data: {}", e);
            }
        });
    });

    view! {
        <div>
            <h2>"Dashboard"</h2>
            <p>{move || state.with(|s| s.balance_line())}</p>
            <p>{move || state.with(|s| s.referral_line())}</p>
            <h3>"Available Ads"</h3>
            {move || {
                state
                    .with(|s| s.ad_links())
                    .into_iter()
                    .map(|link| {
                        view! {
                            <div>
                                <p>{link.title}</p>
                                <a href=link.href target=link.target rel=link.rel>
                                    {link.label}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
