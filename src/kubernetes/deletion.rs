// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Foreground deletion

use crate::error::{DemoError, Result};
use kube::{
    api::DeleteParams,
    runtime::wait::{await_condition, conditions::is_deleted},
    Api, Resource, ResourceExt,
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

/// Delete `name` with foreground propagation.
///
/// With `wait` set, block until the object is gone from the API server, or
/// fail with [`DemoError::DeletionTimeout`] once `wait` has elapsed.
#[instrument(skip(api))]
pub async fn delete_foreground<K>(api: &Api<K>, name: &str, wait: Option<Duration>) -> Result<()>
where
    K: Resource + Clone + Debug + DeserializeOwned + Send + 'static,
{
    let pending = api.delete(name, &DeleteParams::foreground()).await?.left();

    let Some(limit) = wait else {
        return Ok(());
    };
    let Some(uid) = pending.as_ref().and_then(|obj| obj.uid()) else {
        debug!("{} deleted immediately", name);
        return Ok(());
    };

    info!("Waiting up to {:?} for {} to be deleted", limit, name);
    timeout(limit, await_condition(api.clone(), name, is_deleted(&uid)))
        .await
        .map_err(|_| DemoError::DeletionTimeout(name.to_string()))??;

    Ok(())
}
