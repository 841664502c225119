use aws_sdk_s3 as s3;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
use chrono::DateTime;
use thiserror::Error;

use crate::ObjectMetadata;

/// Failure of a head object request
#[derive(Debug, Error)]
pub enum HeadErr {
    /// The bucket has no object under the key
    #[error("Not Found")]
    NotFound,
    /// S3 rejected the request, e.g. access denied
    #[error("{0}")]
    Service(String),
    /// The request never produced a service response (timeout, dispatch, construction)
    #[error("{0}")]
    Sdk(String),
}

impl<R> From<SdkError<HeadObjectError, R>> for HeadErr
where
    R: std::fmt::Debug + 'static,
{
    fn from(err: SdkError<HeadObjectError, R>) -> Self {
        match err.as_service_error() {
            Some(service_err) => HeadErr::from(service_err),
            None => HeadErr::Sdk(DisplayErrorContext(&err).to_string()),
        }
    }
}

impl From<&HeadObjectError> for HeadErr {
    fn from(err: &HeadObjectError) -> Self {
        if err.is_not_found() {
            return HeadErr::NotFound;
        }

        let message = err
            .message()
            .or_else(|| err.code())
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());

        HeadErr::Service(message)
    }
}

/// Performs a head object request for the key
#[tracing::instrument(skip(client))]
pub(crate) async fn head(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<ObjectMetadata, HeadErr> {
    let resp = client.head_object().bucket(bucket).key(key).send().await?;

    Ok(metadata_from_output(&resp))
}

fn metadata_from_output(output: &HeadObjectOutput) -> ObjectMetadata {
    ObjectMetadata {
        content_length: output
            .content_length()
            .and_then(|len| u64::try_from(len).ok())
            .unwrap_or_default(),
        content_type: output.content_type().map(str::to_string),
        last_modified: output
            .last_modified()
            .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::primitives::DateTime as SmithyDateTime;
    use aws_sdk_s3::types::error::NotFound;

    #[test]
    fn maps_head_output_into_metadata() {
        let output = HeadObjectOutput::builder()
            .content_length(1024)
            .content_type("image/png")
            .last_modified(SmithyDateTime::from_secs(1_700_000_000))
            .build();

        let metadata = metadata_from_output(&output);

        assert_eq!(metadata.content_length, 1024);
        assert_eq!(metadata.content_type.as_deref(), Some("image/png"));
        assert_eq!(
            metadata.last_modified.map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn missing_fields_are_defaulted() {
        let output = HeadObjectOutput::builder().content_length(-1).build();

        let metadata = metadata_from_output(&output);

        assert_eq!(metadata.content_length, 0);
        assert_eq!(metadata.content_type, None);
        assert_eq!(metadata.last_modified, None);
    }

    #[test]
    fn not_found_has_plain_message() {
        let err = HeadObjectError::NotFound(NotFound::builder().build());

        let mapped = HeadErr::from(&err);

        assert!(matches!(mapped, HeadErr::NotFound));
        assert_eq!(mapped.to_string(), "Not Found");
    }

    #[test]
    fn service_error_prefers_message_then_code() {
        let with_message = HeadObjectError::generic(
            ErrorMetadata::builder()
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
        );
        let code_only =
            HeadObjectError::generic(ErrorMetadata::builder().code("Forbidden").build());

        assert_eq!(HeadErr::from(&with_message).to_string(), "Access Denied");
        assert_eq!(HeadErr::from(&code_only).to_string(), "Forbidden");
    }
}
