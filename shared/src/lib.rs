//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the rewards portal front-end and the
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Credentials and error bodies
//!   - **[`dto::rewards`]**: Balance and ad inventory
//!   - **[`dto::admin`]**: Admin user listing and withdrawals
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! Field names are snake_case in both Rust and JSON, with one exception: the ad
//! identifier arrives as `_id` and is renamed to [`Ad::id`](dto::rewards::Ad).
//!
//! ## Usage in Frontend
//!
//! ```rust,ignore
//! use shared::dto::auth::Credentials;
//! use shared::dto::rewards::BalanceResponse;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = Credentials {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! reqwest::Client::new()
//!     .post("http://localhost:5000/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .error_for_status()?;
//!
//! let balance: BalanceResponse = reqwest::Client::new()
//!     .get("http://localhost:5000/balance/alice@example.com")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
