use std::env;

use database::DatabaseConnectionInfo;
use depot::{
    database::{DatabaseError, Result},
    report::{ErrorPolicy, RunOptions},
};
use log::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConnectionInfo,
    pub run: RunOptions,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match DatabaseConnectionInfo::from_lookup(&lookup)? {
            Some(info) => info,
            None => {
                warn!("no DATABASE_* variables set, using default connection settings");
                DatabaseConnectionInfo::default()
            }
        };

        let defaults = RunOptions::default();
        let run = RunOptions {
            depot: lookup("DEPOT_FILTER").unwrap_or(defaults.depot),
            error_policy: match lookup("DEPOT_ON_ERROR") {
                Some(policy) => policy.parse::<ErrorPolicy>()?,
                None => defaults.error_policy,
            },
            reset: match lookup("DEPOT_RESET") {
                Some(reset) => parse_flag("DEPOT_RESET", &reset)?,
                None => defaults.reset,
            },
        };

        Ok(Self { database, run })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(DatabaseError::Config(format!(
            "{} `{}` is not a boolean",
            key, other
        ))),
    }
}
