use chrono::{DateTime, Utc};

mod head;

pub use head::HeadErr;

/// The metadata S3 reports for an object, without its content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// Size of the object in bytes
    pub content_length: u64,
    /// The mime type the object was uploaded with
    pub content_type: Option<String>,
    /// When the object was last written
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the metadata of the provided key without downloading it.
    #[tracing::instrument(skip(self))]
    pub async fn head(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, HeadErr> {
        head::head(&self.inner, bucket, key).await
    }
}
