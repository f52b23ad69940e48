//! # Client Configuration
//!
//! Selects where backend requests are sent.
//!
//! | Variable | Effect |
//! |---|---|
//! | `REWARDS_API_BASE_URL` | Absolute backend base URL (default `http://localhost:5000`) |
//! | `REWARDS_API_SAME_ORIGIN` | `1`/`true`: use paths relative to the page origin instead |
//!
//! Native callers read these at runtime with [`ClientConfig::from_env`]. A browser
//! page has no process environment, so the web app bakes them in at build time
//! with [`ClientConfig::from_build_env`].

use std::env;

use crate::error::{ClientError, Result};

pub const API_BASE_URL_ENV: &str = "REWARDS_API_BASE_URL";
pub const SAME_ORIGIN_ENV: &str = "REWARDS_API_SAME_ORIGIN";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Base-path strategy for backend requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBase {
    /// Requests go to `<url>/<path>`.
    Absolute(String),
    /// Requests go to `<page origin>/<path>`, i.e. relative paths.
    SameOrigin,
}

impl Default for ApiBase {
    fn default() -> Self {
        ApiBase::Absolute(DEFAULT_API_BASE_URL.to_string())
    }
}

impl ApiBase {
    /// Build from raw variable values. `same_origin` wins when truthy.
    pub fn from_values(base_url: Option<&str>, same_origin: Option<&str>) -> Self {
        let same_origin = same_origin
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if same_origin {
            return ApiBase::SameOrigin;
        }

        match base_url {
            Some(url) => ApiBase::Absolute(url.trim().to_string()),
            None => ApiBase::default(),
        }
    }

    /// Resolve to a concrete base URL without a trailing slash.
    ///
    /// `origin` is the page origin (e.g. `https://rewards.example`) and is only
    /// consulted for [`ApiBase::SameOrigin`].
    pub fn resolve(&self, origin: Option<&str>) -> Result<String> {
        let base = match self {
            ApiBase::Absolute(url) => url.as_str(),
            ApiBase::SameOrigin => origin.ok_or_else(|| {
                ClientError::Config("same-origin API requires a page origin".to_string())
            })?,
        };

        let base = base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ClientError::Config(format!("{} must not be empty", API_BASE_URL_ENV)));
        }
        Ok(base.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub base: ApiBase,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let base_url = env::var(API_BASE_URL_ENV).ok();
        let same_origin = env::var(SAME_ORIGIN_ENV).ok();
        Self {
            base: ApiBase::from_values(base_url.as_deref(), same_origin.as_deref()),
        }
    }

    /// Values captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self {
            base: ApiBase::from_values(
                option_env!("REWARDS_API_BASE_URL"),
                option_env!("REWARDS_API_SAME_ORIGIN"),
            ),
        }
    }
}
