//! # Rewards Endpoints
//!
//! Per-user balance and the ad inventory.

use shared::{Ad, BalanceResponse};

use super::client::ApiClient;
use crate::error::Result;

/// Get the balance for `user`. The user is sent as a single encoded path segment.
#[tracing::instrument(skip(client))]
pub async fn get_balance(client: &ApiClient, user: &str) -> Result<BalanceResponse> {
    let path = format!("/balance/{}", urlencoding::encode(user));
    let balance: BalanceResponse = client.get_json(&path).await?;
    tracing::debug!(balance = balance.balance, "Balance fetched");
    Ok(balance)
}

/// List ads in backend order.
#[tracing::instrument(skip(client))]
pub async fn list_ads(client: &ApiClient) -> Result<Vec<Ad>> {
    let ads: Vec<Ad> = client.get_json("/ads").await?;
    tracing::debug!(count = ads.len(), "Ads fetched");
    Ok(ads)
}
