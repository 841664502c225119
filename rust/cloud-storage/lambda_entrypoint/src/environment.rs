use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Name of the variable the [Environment] is read from
const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The environment the function is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// the variable could not be read
    #[error("An error occurred while reading envvar: ENVIRONMENT. Err: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the value was not recognized as a valid environment
    #[error("Could not convert {0} into an environment value")]
    UnknownValue(String),
}

impl Environment {
    /// Attempt to read the [Environment] from the `ENVIRONMENT` variable
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let value = std::env::var(ENVIRONMENT_VAR)?;
        value.parse()
    }

    /// attempt to read the [Environment], falling back to production
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = EnvironmentErr;

    fn from_str(environment: &str) -> Result<Self, EnvironmentErr> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(EnvironmentErr::UnknownValue(s.to_string())),
        }
    }
}
