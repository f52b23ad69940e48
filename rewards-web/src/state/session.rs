//! Session state management

use leptos::prelude::*;
use lib_rewards::{Role, Session};

/// Global session context. Lives for the page load only.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
        }
    }

    pub fn user(&self) -> Option<String> {
        self.session.with(|session| session.user().map(str::to_string))
    }

    pub fn role(&self) -> Role {
        self.session.with(|session| session.role())
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
