use std::env::VarError;

use anyhow::Context;
pub use lambda_entrypoint::Environment;
use lambda_entrypoint::LambdaEntrypoint;

/// Region used when the lambda runtime does not provide one
const DEFAULT_REGION: &str = "us-east-1";

/// The configuration parameters for the function.
///
/// Everything is pulled from environment variables at cold start. The lambda runtime
/// populates `AWS_REGION`; `ENVIRONMENT` is set on the function configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The region the s3 client talks to
    pub region: String,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn new(region: &str, environment: Environment) -> Self {
        Config {
            region: region.to_string(),
            environment,
        }
    }

    /// Reads the process environment, after loading a `.env` file if one is present
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let region = match std::env::var("AWS_REGION") {
            Ok(region) if !region.is_empty() => region,
            Ok(_) | Err(VarError::NotPresent) => DEFAULT_REGION.to_string(),
            Err(e) => return Err(e).context("AWS_REGION must be valid unicode"),
        };
        let environment = Environment::new_or_prod();

        Ok(Config::new(&region, environment))
    }

    /// Tracing setup for the configured environment
    pub fn entrypoint(&self) -> LambdaEntrypoint {
        LambdaEntrypoint::new(self.environment)
    }
}
