//! # Service Traits
//!
//! [`RewardsApi`] is the seam between the view models and the backend. The
//! HTTP implementation is [`ApiClient`](crate::ApiClient); tests substitute
//! in-memory fakes.
//!
//! Futures are not required to be `Send`: in the browser everything runs on the
//! single page thread and `reqwest`'s fetch futures are `!Send`.

use async_trait::async_trait;
use shared::{Ad, AdminUser, BalanceResponse, Credentials};

use crate::error::Result;

#[async_trait(?Send)]
pub trait RewardsApi {
    /// `POST /login`. The response body is not inspected.
    async fn login(&self, credentials: &Credentials) -> Result<()>;

    /// `POST /register`. The response body is not inspected.
    async fn register(&self, credentials: &Credentials) -> Result<()>;

    /// `GET /balance/{user}`
    async fn balance(&self, user: &str) -> Result<BalanceResponse>;

    /// `GET /ads`, in backend order.
    async fn ads(&self) -> Result<Vec<Ad>>;

    /// `GET /admin/users`
    async fn admin_users(&self) -> Result<Vec<AdminUser>>;

    /// `POST /admin/withdraw`. The response body is not inspected.
    async fn withdraw(&self, email: &str) -> Result<()>;
}
