//! Page modules

pub mod admin;
pub mod dashboard;
pub mod login;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
