use crate::account::DEFAULT_AGENCY;
use crate::{CheckingPolicy, Money, MoneyError};

use std::env;

use thiserror::Error;

pub const AGENCY_VAR: &str = "BANK_AGENCY";
pub const WITHDRAWAL_LIMIT_VAR: &str = "BANK_WITHDRAWAL_LIMIT";
pub const DAILY_WITHDRAWAL_CAP_VAR: &str = "BANK_DAILY_WITHDRAWAL_CAP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {0}: agency must not be empty")]
    EmptyAgency(&'static str),

    #[error("Invalid {0}: {1}")]
    WithdrawalLimit(&'static str, MoneyError),

    #[error("Invalid {0}: withdrawal limit must be greater than zero, found {1}")]
    NonPositiveLimit(&'static str, Money),

    #[error("Invalid {0}: expected a whole number, found {1:?}")]
    DailyWithdrawalCap(&'static str, String),
}

/// Settings applied to every account the bank opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub agency: String,
    pub checking: CheckingPolicy,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            agency: DEFAULT_AGENCY.to_string(),
            checking: CheckingPolicy::default(),
        }
    }
}

impl BankConfig {
    /// Reads overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from defaults, overridden by any value `lookup` yields
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(agency) = lookup(AGENCY_VAR) {
            let agency = agency.trim();
            if agency.is_empty() {
                return Err(ConfigError::EmptyAgency(AGENCY_VAR));
            }
            config.agency = agency.to_string();
        }

        if let Some(limit) = lookup(WITHDRAWAL_LIMIT_VAR) {
            let limit = Money::parse(&limit)
                .map_err(|e| ConfigError::WithdrawalLimit(WITHDRAWAL_LIMIT_VAR, e))?;
            if !limit.is_positive() {
                return Err(ConfigError::NonPositiveLimit(WITHDRAWAL_LIMIT_VAR, limit));
            }
            config.checking.withdrawal_limit = limit;
        }

        if let Some(cap) = lookup(DAILY_WITHDRAWAL_CAP_VAR) {
            config.checking.daily_withdrawal_cap = cap.trim().parse().map_err(|_| {
                ConfigError::DailyWithdrawalCap(DAILY_WITHDRAWAL_CAP_VAR, cap.clone())
            })?;
        }

        log::debug!("Loaded bank config: {config:?}");

        Ok(config)
    }
}
