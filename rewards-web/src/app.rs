//! Root shell: session context, navigation and the route table.
//!
//! Every route is always registered. The navbar hides links by role, but
//! nothing stops a visitor from opening `/admin` directly.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    StaticSegment,
};
use lib_rewards::AppRoute;

use crate::components::Navbar;
use crate::pages::{AdminPage, DashboardPage, LoginPage};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                    <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                    <Route path=StaticSegment(AppRoute::Admin.segment()) view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h2>"404 - Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Go to Login"</A>
        </div>
    }
}
