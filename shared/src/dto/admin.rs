use serde::{Deserialize, Serialize};

/// One row of the admin user listing (`GET /admin/users`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub email: String,
    pub balance: f64,
}

/// Withdrawal request body (`POST /admin/withdraw`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WithdrawRequest {
    pub email: String,
}
