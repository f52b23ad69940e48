//! # View Models
//!
//! State and operations behind each page, independent of any UI toolkit.
//! Operations that fetch take a [`RewardsApi`](crate::RewardsApi) and either
//! mutate the state in place or hand back an outcome for the caller to apply,
//! which suits reactive front-ends that cannot hold a borrow across an await.

pub mod admin;
pub mod dashboard;
pub mod login;

pub use admin::{AdminPanelState, AdminRow, WithdrawOutcome};
pub use dashboard::{AdLink, DashboardState, DashboardUpdate};
pub use login::{AuthMode, LoginForm, LoginOutcome};

#[cfg(test)]
pub(crate) mod fake;
