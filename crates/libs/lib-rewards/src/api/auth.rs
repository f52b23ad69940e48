//! # Authentication Endpoints
//!
//! Login and registration. Both accept the same credentials body and the
//! response body is never inspected: a 2xx status is the whole answer.

use shared::Credentials;

use super::client::ApiClient;
use crate::error::{ClientError, Result};

/// Login with email and password.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<()> {
    authenticate(client, "/login", credentials).await
}

/// Register a new account with email and password.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn register(client: &ApiClient, credentials: &Credentials) -> Result<()> {
    authenticate(client, "/register", credentials).await
}

async fn authenticate(client: &ApiClient, path: &str, credentials: &Credentials) -> Result<()> {
    tracing::info!(path, "Attempting authentication");

    match client.post_unit(path, credentials).await {
        Ok(()) => {
            tracing::info!(path, "Authentication successful");
            Ok(())
        }
        Err(ClientError::Status { status, message }) => {
            tracing::warn!(path, status, error = %message, "Authentication rejected");
            Err(ClientError::Status { status, message })
        }
        Err(e) => {
            tracing::error!(path, error = %e, "Authentication request failed");
            Err(e)
        }
    }
}
