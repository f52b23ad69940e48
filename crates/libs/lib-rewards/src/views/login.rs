//! # Login View Model
//!
//! Credentials are submitted exactly as typed. A successful submit promotes the
//! email to the session; a failed one shows [`LOGIN_FAILED_MESSAGE`] and keeps
//! both fields, password included.

use shared::Credentials;

use crate::service::RewardsApi;
use crate::session::Session;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your credentials.";

/// Which endpoint the form posts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Backend accepted; carries the email to promote.
    Authenticated(String),
    /// Backend rejected or was unreachable; carries the underlying error text.
    Rejected(String),
}

impl LoginOutcome {
    /// Promote the email on success. Independent of the form, which may be gone
    /// by the time the response arrives.
    pub fn apply_to_session(&self, session: &mut Session) {
        if let LoginOutcome::Authenticated(email) = self {
            session.sign_in(email.clone());
        }
    }
}

/// Submit `credentials` with `mode` and report the outcome. Never touches state.
pub async fn authenticate<A: RewardsApi + ?Sized>(
    api: &A,
    mode: AuthMode,
    credentials: Credentials,
) -> LoginOutcome {
    let result = match mode {
        AuthMode::Login => api.login(&credentials).await,
        AuthMode::Register => api.register(&credentials).await,
    };

    match result {
        Ok(()) => LoginOutcome::Authenticated(credentials.email),
        Err(e) => {
            tracing::error!(error = %e, mode = mode.label(), "Login failed");
            LoginOutcome::Rejected(e.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Visible error message, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show or clear the error line for a finished submit. Fields are kept as typed.
    pub fn record(&mut self, outcome: &LoginOutcome) {
        self.error = match outcome {
            LoginOutcome::Authenticated(_) => None,
            LoginOutcome::Rejected(_) => Some(LOGIN_FAILED_MESSAGE.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_tracing;
    use crate::views::fake::FakeApi;

    fn api() -> FakeApi {
        init_tracing();
        FakeApi {
            password: Some("secret".to_string()),
            ..Default::default()
        }
    }

    /// Same order as the login page: session first, then the form.
    async fn submit(api: &FakeApi, form: &mut LoginForm, session: &mut Session) {
        let outcome = authenticate(api, form.mode, form.credentials()).await;
        outcome.apply_to_session(session);
        form.record(&outcome);
    }

    #[tokio::test]
    async fn test_accepted_login_sets_exact_email() {
        let api = api();
        let mut session = Session::new();
        let mut form = LoginForm::with_credentials("Mixed.Case@Example.com", "secret");

        submit(&api, &mut form, &mut session).await;

        assert_eq!(session.user(), Some("Mixed.Case@Example.com"));
        assert_eq!(form.error(), None);
        assert_eq!(api.calls(), vec!["login Mixed.Case@Example.com"]);
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_session_and_password() {
        let api = api();
        let mut session = Session::new();
        session.sign_in("earlier@b.com");
        let mut form = LoginForm::with_credentials("a@b.com", "wrong");

        submit(&api, &mut form, &mut session).await;

        assert_eq!(session.user(), Some("earlier@b.com"));
        assert_eq!(form.error(), Some(LOGIN_FAILED_MESSAGE));
        assert_eq!(form.password, "wrong");
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let api = api();
        let mut session = Session::new();
        let mut form = LoginForm::with_credentials("a@b.com", "wrong");

        submit(&api, &mut form, &mut session).await;
        assert!(form.error().is_some());

        form.password = "secret".to_string();
        submit(&api, &mut form, &mut session).await;
        assert_eq!(form.error(), None);
        assert_eq!(session.user(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_session_set_without_form() {
        // The page may be disposed before the response; the session still updates
        let api = api();
        let mut session = Session::new();

        let outcome = authenticate(&api, AuthMode::Login, Credentials {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        })
        .await;
        outcome.apply_to_session(&mut session);

        assert_eq!(session.user(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_rejection_leaves_session_untouched() {
        let mut session = Session::new();
        LoginOutcome::Rejected("HTTP 401: nope".to_string()).apply_to_session(&mut session);
        assert_eq!(session, Session::new());
    }

    #[tokio::test]
    async fn test_no_client_side_validation() {
        let api = FakeApi::default();
        let outcome = authenticate(&api, AuthMode::Login, Credentials::default()).await;

        // Empty fields still reach the backend
        assert_eq!(api.calls(), vec!["login "]);
        assert!(matches!(outcome, LoginOutcome::Rejected(_)));
    }

    #[tokio::test]
    async fn test_register_mode_uses_register_endpoint() {
        let api = api();
        let mut session = Session::new();
        let mut form = LoginForm::with_credentials("new@b.com", "secret");
        form.mode = form.mode.toggled();

        submit(&api, &mut form, &mut session).await;

        assert_eq!(api.calls(), vec!["register new@b.com"]);
        assert_eq!(session.user(), Some("new@b.com"));
    }
}
