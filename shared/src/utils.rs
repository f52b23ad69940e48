//! # Shared Utility Functions
//!
//! Display helpers used by every rewards front-end.
//!
//! ```rust
//! use shared::utils::format_usdt;
//!
//! assert_eq!(format_usdt(42.5), "42.5 USDT");
//! assert_eq!(format_usdt(0.0), "0 USDT");
//! ```

/// Currency label appended to every displayed balance.
pub const CURRENCY: &str = "USDT";

/// Format an amount the way the backend sent it, followed by the currency label.
///
/// No rounding or padding is applied: `42.5` stays `42.5` and `100.0` prints as `100`.
pub fn format_usdt(amount: f64) -> String {
    format!("{} {}", amount, CURRENCY)
}
