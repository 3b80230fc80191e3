use std::future::Future;

use aws_config::{BehaviorVersion, Region, SdkConfig};

pub mod ecr;
pub mod sts;

pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Drives one SDK request to completion from a synchronous trait method.
/// Requires a multi-threaded tokio runtime.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
