//! # Admin Panel View Model
//!
//! The user list is fetched once when the panel mounts. Withdrawals never touch
//! it, so balances shown after a withdrawal can be stale.

use shared::{format_usdt, AdminUser};

use crate::error::Result;
use crate::service::RewardsApi;

pub const WITHDRAW_BUTTON_LABEL: &str = "Withdraw Funds";
pub const WITHDRAW_SUCCESS_MESSAGE: &str = "Withdrawal successful";
pub const WITHDRAW_FAILURE_MESSAGE: &str = "Withdrawal failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Succeeded,
    Failed,
}

impl WithdrawOutcome {
    /// Text for the blocking alert shown after the request settles.
    pub fn alert_message(self) -> &'static str {
        match self {
            WithdrawOutcome::Succeeded => WITHDRAW_SUCCESS_MESSAGE,
            WithdrawOutcome::Failed => WITHDRAW_FAILURE_MESSAGE,
        }
    }
}

/// Post a withdrawal for `email`. Failures are logged, never returned.
pub async fn withdraw<A: RewardsApi + ?Sized>(api: &A, email: &str) -> WithdrawOutcome {
    match api.withdraw(email).await {
        Ok(()) => WithdrawOutcome::Succeeded,
        Err(e) => {
            tracing::error!(email, error = %e, "Withdrawal failed");
            WithdrawOutcome::Failed
        }
    }
}

/// One rendered user row: the email the withdraw button posts and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub email: String,
    pub label: String,
}

pub fn row_label(user: &AdminUser) -> String {
    format!("{} - Balance: {}", user.email, format_usdt(user.balance))
}

/// `GET /admin/users`, logging failures.
pub async fn fetch_users<A: RewardsApi + ?Sized>(api: &A) -> Result<Vec<AdminUser>> {
    api.admin_users().await.inspect_err(|e| {
        tracing::error!(error = %e, "Error fetching users");
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminPanelState {
    pub users: Vec<AdminUser>,
}

impl AdminPanelState {
    /// Only called once per mount; withdrawals never come back through here.
    pub fn set_users(&mut self, users: Vec<AdminUser>) {
        self.users = users;
    }

    pub fn rows(&self) -> Vec<AdminRow> {
        self.users
            .iter()
            .map(|user| AdminRow {
                email: user.email.clone(),
                label: row_label(user),
            })
            .collect()
    }
}
