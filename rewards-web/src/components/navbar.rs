//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use lib_rewards::nav_links;

use crate::state::session::use_session_context;

/// Links re-render whenever the session role changes.
#[component]
pub fn Navbar() -> impl IntoView {
    let session_ctx = use_session_context();

    view! {
        <nav>
            {move || {
                nav_links(session_ctx.role())
                    .into_iter()
                    .map(|link| view! { <A href=link.href>{link.label}</A> " " })
                    .collect_view()
            }}
        </nav>
    }
}
