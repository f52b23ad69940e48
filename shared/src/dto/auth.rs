use serde::{Deserialize, Serialize};

/// Login or registration request body.
///
/// The same shape is posted to `/login` and `/register`. No client-side
/// validation is applied to either field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
