//! In-memory [`RewardsApi`] for view model tests.

use std::cell::RefCell;

use async_trait::async_trait;
use shared::{Ad, AdminUser, BalanceResponse, Credentials};

use crate::error::{ClientError, Result};
use crate::service::RewardsApi;

/// Each field set to `None` makes the matching call fail with HTTP 500.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub password: Option<String>,
    pub balance: Option<f64>,
    pub ads: Option<Vec<Ad>>,
    pub users: Option<Vec<AdminUser>>,
    pub withdraw_ok: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn check_password(&self, credentials: &Credentials) -> Result<()> {
        match &self.password {
            Some(password) if *password == credentials.password => Ok(()),
            _ => Err(ClientError::Status {
                status: 401,
                message: "Invalid credentials".to_string(),
            }),
        }
    }
}

fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

#[async_trait(?Send)]
impl RewardsApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.record(format!("login {}", credentials.email));
        self.check_password(credentials)
    }

    async fn register(&self, credentials: &Credentials) -> Result<()> {
        self.record(format!("register {}", credentials.email));
        self.check_password(credentials)
    }

    async fn balance(&self, user: &str) -> Result<BalanceResponse> {
        self.record(format!("balance {}", user));
        self.balance
            .map(|balance| BalanceResponse { balance })
            .ok_or_else(server_error)
    }

    async fn ads(&self) -> Result<Vec<Ad>> {
        self.record("ads");
        self.ads.clone().ok_or_else(server_error)
    }

    async fn admin_users(&self) -> Result<Vec<AdminUser>> {
        self.record("admin_users");
        self.users.clone().ok_or_else(server_error)
    }

    async fn withdraw(&self, email: &str) -> Result<()> {
        self.record(format!("withdraw {}", email));
        if self.withdraw_ok {
            Ok(())
        } else {
            Err(server_error())
        }
    }
}
