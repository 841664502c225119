use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::domain::{models::NotificationRecord, ports::EventDispatcher};


/// Handles the s3 object created event.
/// A failed lookup is reported through the returned string, not as a lambda error.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<D>(dispatcher: &D, event: LambdaEvent<S3Event>) -> Result<String, Error>
where
    D: EventDispatcher,
{
    tracing::trace!("processing event");

    let records = event
        .payload
        .records
        .iter()
        .map(notification_record)
        .collect::<Vec<_>>();

    let outcome = dispatcher.dispatch(records).await;

    Ok(outcome.to_string())
}

fn notification_record(record: &S3EventRecord) -> NotificationRecord {
    let bucket = record.s3.bucket.name.clone().unwrap_or_else(|| {
        tracing::warn!(event_name=?record.event_name, "record is missing bucket name");
        String::new()
    });

    let key = match record.s3.object.key.as_deref() {
        Some(key) => decode_key(key),
        None => {
            tracing::warn!(event_name=?record.event_name, "record is missing object key");
            String::new()
        }
    };

    NotificationRecord { bucket, key }
}

/// Object keys in s3 notifications are form encoded, spaces arrive as `+`
fn decode_key(key: &str) -> String {
    match urlencoding::decode(&key.replace('+', " ")) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!(error=?e, key=%key, "unable to decode key");
            key.to_string()
        }
    }
}
