use serde::{Deserialize, Serialize};

/// Balance for a single user, as returned by `GET /balance/{user}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    pub balance: f64,
}

/// A piece of sponsored content the user can open for engagement credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ad {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub url: String,
}
