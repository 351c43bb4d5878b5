// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Optimistic-concurrency retry for read-modify-write cycles

use crate::constants::retry::{BASE_DELAY_MILLIS, MAX_ATTEMPTS};
use crate::error::{DemoError, Result};
use backon::{ExponentialBuilder, Retryable};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Backoff used for conflicting updates: five attempts in total, a fixed 10ms step.
///
/// Full jitter: each sleep is drawn anywhere between zero and the step.
pub fn default_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(BASE_DELAY_MILLIS))
        .with_factor(1.0)
        .with_jitter()
        .with_max_times(MAX_ATTEMPTS - 1)
}

/// Whether an error is a version conflict (HTTP 409) reported by the API server
pub fn is_conflict(err: &DemoError) -> bool {
    err.api_status() == Some(409)
}

/// Run `op` and run it again from the start each time it fails with a conflict.
///
/// `op` must perform the whole get, mutate, update cycle so every attempt
/// works on the latest resource version. Errors other than conflicts are
/// returned immediately; once the backoff is exhausted the last conflict is
/// returned.
pub async fn retry_on_conflict<T, F, Fut>(backoff: ExponentialBuilder, op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    op.retry(backoff)
        .sleep(tokio::time::sleep)
        .when(is_conflict)
        .notify(|err, delay| {
            warn!("Update conflicted ({}), retrying in {:?}", err, delay);
        })
        .await
}
