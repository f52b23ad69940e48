//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the rewards backend over its REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login/registration credentials and error bodies
//! - [`rewards`] - Balance and ad listing
//! - [`admin`] - Admin user rows and withdrawal requests
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /balance/alice@example.com
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "balance": 42.5 }
//! ```
//!
//! ```text
//! GET /ads
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   { "_id": "1", "title": "Ad A", "url": "http://x" }
//! ]
//! ```

pub mod admin;
pub mod auth;
pub mod rewards;

pub use admin::*;
pub use auth::*;
pub use rewards::*;
