//! # Backend API Client Module
//!
//! HTTP client for the rewards backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct, request helpers, RewardsApi impl
//! ├── auth.rs     - Login and registration
//! ├── rewards.rs  - Balance and ad listing
//! └── admin.rs    - User listing and withdrawals
//! ```

pub mod admin;
pub mod auth;
pub mod client;
pub mod rewards;

pub use client::ApiClient;
