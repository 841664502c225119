use s3_client::HeadErr;

use crate::domain::{
    models::{LookupError, ObjectMetadata},
    ports::ObjectMetadataLookup,
};

impl From<HeadErr> for LookupError {
    fn from(err: HeadErr) -> Self {
        LookupError::new(err.to_string())
    }
}

impl ObjectMetadataLookup for s3_client::S3 {
    async fn head_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, LookupError> {
        Ok(self.head(bucket, key).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_errors_keep_their_message() {
        assert_eq!(LookupError::from(HeadErr::NotFound).message(), "Not Found");
        assert_eq!(
            LookupError::from(HeadErr::Service("Access Denied".to_string())).message(),
            "Access Denied"
        );
        assert_eq!(
            LookupError::from(HeadErr::Sdk("dispatch failure: timeout".to_string())).message(),
            "dispatch failure: timeout"
        );
    }
}
