use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const TABLEAU_SECRET_NAME: &str = "TABLEAU_SECRET_NAME";
pub const SES_REGION: &str = "SES_REGION";
pub const LINK_EXPIRES_IN_SECS: &str = "LINK_EXPIRES_IN_SECS";
pub const LINK_VALIDITY_HOURS: &str = "LINK_VALIDITY_HOURS";

pub const DEFAULT_SES_REGION: &str = "us-west-2";
pub const DEFAULT_LINK_EXPIRES_IN_SECS: u64 = 600_000;
pub const DEFAULT_LINK_VALIDITY_HOURS: u64 = tabpdf_notify::message::DEFAULT_VALIDITY_HOURS;

/// Process configuration, read once per cold start and handed to each unit.
///
/// `link_expires_in` (how long the presigned URL works) and
/// `link_validity_hours` (what the email tells the reader) are independent;
/// keeping them consistent is up to the deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tableau_secret_name: Option<String>,
    pub ses_region: String,
    pub link_expires_in: Duration,
    pub link_validity_hours: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tableau_secret_name: None,
            ses_region: DEFAULT_SES_REGION.to_string(),
            link_expires_in: Duration::from_secs(DEFAULT_LINK_EXPIRES_IN_SECS),
            link_validity_hours: DEFAULT_LINK_VALIDITY_HOURS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let link_expires_in = match get(LINK_EXPIRES_IN_SECS) {
            Some(v) => Duration::from_secs(parse_u64(LINK_EXPIRES_IN_SECS, &v)?),
            None => defaults.link_expires_in,
        };
        let link_validity_hours = match get(LINK_VALIDITY_HOURS) {
            Some(v) => parse_u64(LINK_VALIDITY_HOURS, &v)?,
            None => defaults.link_validity_hours,
        };

        Ok(Config {
            tableau_secret_name: get(TABLEAU_SECRET_NAME),
            ses_region: get(SES_REGION).unwrap_or(defaults.ses_region),
            link_expires_in,
            link_validity_hours,
        })
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
