use chrono::SecondsFormat;

use crate::domain::{
    classify::{Classifier, FileCategory},
    models::{BatchOutcome, LookupError, NotificationRecord},
    ports::{EventDispatcher, ObjectMetadataLookup},
};


/// Looks up every record in turn and logs what it finds.
/// Holds the metadata client for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DispatcherImpl<L> {
    lookup: L,
    classifier: Classifier,
}

impl<L> DispatcherImpl<L>
where
    L: ObjectMetadataLookup,
{
    pub fn new(lookup: L, classifier: Classifier) -> Self {
        Self { lookup, classifier }
    }

    #[tracing::instrument(skip(self, record), fields(bucket = %record.bucket, key = %record.key))]
    async fn dispatch_record(
        &self,
        record: &NotificationRecord,
    ) -> Result<Option<FileCategory>, LookupError> {
        tracing::info!(
            "received event for bucket: {}, key: {}",
            record.bucket,
            record.key
        );

        let metadata = self
            .lookup
            .head_metadata(&record.bucket, &record.key)
            .await?;

        tracing::info!("file size: {} bytes", metadata.content_length);
        tracing::info!(
            "content type: {}",
            metadata.content_type.as_deref().unwrap_or("unknown")
        );
        match metadata.last_modified {
            Some(last_modified) => tracing::info!(
                "last modified: {}",
                last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            None => tracing::info!("last modified: unknown"),
        }

        let category = self.classifier.classify(&record.key);
        match category {
            Some(FileCategory::Text) => tracing::info!("processing text file"),
            Some(FileCategory::Image) => tracing::info!("processing image file"),
            None => tracing::trace!("no handler for file type"),
        }

        Ok(category)
    }
}

impl<L> EventDispatcher for DispatcherImpl<L>
where
    L: ObjectMetadataLookup,
{
    #[tracing::instrument(skip_all, fields(record_count = records.len()))]
    async fn dispatch(&self, records: Vec<NotificationRecord>) -> BatchOutcome {
        tracing::info!("processing s3 records");

        for record in records.iter() {
            if let Err(e) = self.dispatch_record(record).await {
                // the remaining records are dropped along with this invocation
                tracing::error!(error=%e, "error processing s3 event: {e}");
                return e.into();
            }
        }

        tracing::trace!("processing complete");

        BatchOutcome::Processed {
            count: records.len(),
        }
    }
}
