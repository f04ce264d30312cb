use std::any::Any;
use std::env::vars;

use directory_states::{State, state_assign_impl};
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::StatusPolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_USER_LIMIT: u32 = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read directory configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("DIRECTORY_USER_LIMIT must be positive")]
    ZeroLimit,
    #[error("DIRECTORY_USER_LIMIT must be at most {max}, got {limit}")]
    LimitTooHigh { limit: u32, max: u32 },
}

/// Where and how the directory fetches its users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub api_base_url: String,
    pub user_limit: u32,
    pub status_policy: StatusPolicy,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            user_limit: DEFAULT_USER_LIMIT,
            status_policy: StatusPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    directory_api_base_url: Option<String>,
    directory_user_limit: Option<u32>,
    directory_status_policy: Option<StatusPolicy>,
}

impl DirectoryConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    /// Defaults overridden by `DIRECTORY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_iter(vars())?;
        info!(
            "Directory config: api={} limit={} status_policy={:?}",
            config.api_base_url, config.user_limit, config.status_policy
        );
        Ok(config)
    }

    pub fn from_iter<S: AsRef<str>>(
        iter: impl IntoIterator<Item = (S, S)>,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_iter(iter)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let user_limit = raw.directory_user_limit.unwrap_or(defaults.user_limit);
        if user_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if user_limit > DEFAULT_USER_LIMIT {
            return Err(ConfigError::LimitTooHigh {
                limit: user_limit,
                max: DEFAULT_USER_LIMIT,
            });
        }
        Ok(Self {
            api_base_url: raw
                .directory_api_base_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_base_url),
            user_limit,
            status_policy: raw
                .directory_status_policy
                .unwrap_or(defaults.status_policy),
        })
    }

    /// Upper bound on the number of records kept from one fetch.
    pub fn record_limit(&self) -> usize {
        self.user_limit.min(DEFAULT_USER_LIMIT) as usize
    }

    /// `GET` target for the user list.
    pub fn users_url(&self) -> String {
        format!(
            "{}/users?limit={}",
            self.api_base_url.trim_end_matches('/'),
            self.user_limit
        )
    }
}

impl State for DirectoryConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
