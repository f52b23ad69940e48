//! # Rewards Client Library
//!
//! Target-independent core of the rewards portal front-end. Compiles natively and
//! for `wasm32-unknown-unknown`, where `reqwest` is backed by the browser's fetch API.
//!
//! ## Structure
//!
//! - [`config`] - Backend base URL selection
//! - [`error`] - [`ClientError`] taxonomy
//! - [`service`] - [`RewardsApi`] service trait
//! - [`api`] - [`ApiClient`], the HTTP implementation of [`RewardsApi`]
//! - [`session`] - Current user and derived [`Role`]
//! - [`routes`] - Route table and navigation link gating
//! - [`referral`] - Client-generated referral codes
//! - [`views`] - Login, dashboard and admin view models

pub mod api;
pub mod config;
pub mod error;
pub mod referral;
pub mod routes;
pub mod service;
pub mod session;
pub mod views;

pub use api::ApiClient;
pub use config::{ApiBase, ClientConfig};
pub use error::{ClientError, Result};
pub use referral::ReferralCode;
pub use routes::{nav_links, AppRoute, NavLink};
pub use service::RewardsApi;
pub use session::{Role, Session, ADMIN_EMAIL};
