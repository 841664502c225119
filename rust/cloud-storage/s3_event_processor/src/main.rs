#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self},
};
use s3_event_processor::{
    config::Config,
    domain::{classify::Classifier, service::DispatcherImpl},
    inbound::lambda::handler,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env().context("all necessary env vars should be available")?;

    config.entrypoint().init();

    tracing::trace!(environment=%config.environment, region=%config.region, "initiating lambda");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let shared_dispatcher = Arc::new(DispatcherImpl::new(s3_client, Classifier::default()));

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let dispatcher = shared_dispatcher.clone();

        async move { handler(dispatcher.as_ref(), event).await }
    });

    run(func).await
}
