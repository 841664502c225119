use std::fmt::Display;

use thiserror::Error;

pub use s3_client::ObjectMetadata;

/// A single object created notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub bucket: String,
    pub key: String,
}

impl NotificationRecord {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Any failure to look up the metadata of an object.
/// Not found, access denied and transient errors are not distinguished.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct LookupError(String);

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// The result of dispatching a whole batch.
/// The [Display] impl is the value returned to the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every record was processed
    Processed { count: usize },
    /// Processing stopped at the first failed lookup
    Failed { message: String },
}

impl Display for BatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchOutcome::Processed { count } => {
                write!(f, "Successfully processed {count} records.")
            }
            BatchOutcome::Failed { message } => write!(f, "Error: {message}"),
        }
    }
}

impl From<LookupError> for BatchOutcome {
    fn from(err: LookupError) -> Self {
        BatchOutcome::Failed { message: err.0 }
    }
}
