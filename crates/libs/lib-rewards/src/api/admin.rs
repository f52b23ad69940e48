//! # Admin Endpoints
//!
//! Not access-controlled on the client side; the backend decides.

use shared::{AdminUser, WithdrawRequest};

use super::client::ApiClient;
use crate::error::Result;

#[tracing::instrument(skip(client))]
pub async fn list_users(client: &ApiClient) -> Result<Vec<AdminUser>> {
    let users: Vec<AdminUser> = client.get_json("/admin/users").await?;
    tracing::debug!(count = users.len(), "Users fetched");
    Ok(users)
}

/// Ask the backend to release `email`'s balance.
#[tracing::instrument(skip(client))]
pub async fn withdraw(client: &ApiClient, email: &str) -> Result<()> {
    let request = WithdrawRequest {
        email: email.to_string(),
    };
    client.post_unit("/admin/withdraw", &request).await?;
    tracing::info!("Withdrawal accepted");
    Ok(())
}
