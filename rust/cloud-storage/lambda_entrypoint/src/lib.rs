#![deny(missing_docs)]
//! Tracing setup shared by the lambda binaries.
//! Call [LambdaEntrypoint::init] once at cold start, before the runtime loop starts.

pub use environment::{Environment, EnvironmentErr};
use tracing_subscriber::EnvFilter;

mod environment;

/// How log events are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi line, colored output for a terminal
    Pretty,
    /// One flattened json object per event, indexed by cloudwatch
    Json,
}

impl From<Environment> for LogFormat {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => LogFormat::Pretty,
            Environment::Production | Environment::Develop => LogFormat::Json,
        }
    }
}

/// Installs the global subscriber for the [Environment] the function runs in
#[derive(Debug)]
pub struct LambdaEntrypoint {
    format: LogFormat,
}

/// proof that [LambdaEntrypoint::init] ran
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl LambdaEntrypoint {
    /// pick the log format for `env`
    pub fn new(env: Environment) -> Self {
        Self { format: env.into() }
    }

    /// the format [Self::init] will install
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// install the panic hook and the global subscriber. Filtering follows `RUST_LOG`.
    pub fn init(self) -> InitializedEntrypoint {
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_file(true)
            .with_line_number(true);

        match self.format {
            LogFormat::Pretty => builder.with_ansi(true).pretty().init(),
            LogFormat::Json => builder
                .with_ansi(false)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init(),
        }

        InitializedEntrypoint(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_logs_are_pretty() {
        assert_eq!(
            LambdaEntrypoint::new(Environment::Local).format(),
            LogFormat::Pretty
        );
    }

    #[test]
    fn deployed_logs_are_json() {
        assert_eq!(
            LambdaEntrypoint::new(Environment::Production).format(),
            LogFormat::Json
        );
        assert_eq!(
            LambdaEntrypoint::new(Environment::Develop).format(),
            LogFormat::Json
        );
    }
}
