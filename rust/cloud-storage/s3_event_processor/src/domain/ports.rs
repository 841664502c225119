use crate::domain::models::{BatchOutcome, LookupError, NotificationRecord, ObjectMetadata};

/// Read only access to object metadata in the storage backend
#[cfg_attr(test, mockall::automock)]
pub trait ObjectMetadataLookup: Send + Sync + 'static {
    /// Fetch the current metadata of `key` in `bucket` without its content
    fn head_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<ObjectMetadata, LookupError>> + Send;
}

/// Processes a batch of object created notifications
#[cfg_attr(test, mockall::automock)]
pub trait EventDispatcher: Send + Sync + 'static {
    /// Process the records in order, stopping at the first failure
    fn dispatch(
        &self,
        records: Vec<NotificationRecord>,
    ) -> impl Future<Output = BatchOutcome> + Send;
}
