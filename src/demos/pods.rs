// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod polling loop - lists every Pod in the demo namespace over and over.

use crate::console::Console;
use crate::constants::{console::POLL_BANNER, NAMESPACE};
use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client, ResourceExt};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::time::sleep;
use tracing::{debug, warn};

pub struct PodPoller<R, W> {
    pods: Api<Pod>,
    console: Console<R, W>,
    interval: Option<Duration>,
    max_iterations: Option<u64>,
}

impl<R, W> PodPoller<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: Client, console: Console<R, W>) -> Self {
        Self {
            pods: Api::namespaced(client, NAMESPACE),
            console,
            interval: None,
            max_iterations: None,
        }
    }

    /// Sleep between iterations instead of polling back to back
    pub fn with_interval(mut self, interval: Option<Duration>) -> Self {
        self.interval = interval;
        self
    }

    /// Stop after `max` iterations instead of running forever
    pub fn with_max_iterations(mut self, max: Option<u64>) -> Self {
        self.max_iterations = max;
        self
    }

    /// Poll until the iteration cap is reached, which without a cap is never.
    ///
    /// A failed list call is logged and the next iteration goes ahead; only
    /// console failures end the loop early.
    pub async fn run(mut self) -> Result<Console<R, W>> {
        let mut iteration: u64 = 0;

        while self.max_iterations.map_or(true, |max| iteration < max) {
            iteration += 1;
            self.console
                .line(&format!("{} {}", iteration, POLL_BANNER))
                .await?;

            self.poll_once().await?;

            if let Some(interval) = self.interval {
                sleep(interval).await;
            }
        }

        debug!("Stopped polling after {} iterations", iteration);
        Ok(self.console)
    }

    async fn poll_once(&mut self) -> Result<()> {
        match self.pods.list(&ListParams::default()).await {
            Ok(pods) => {
                let names = pods.items.iter().map(|p| p.name_any());
                self.console.names(names).await
            }
            Err(e) => {
                warn!("Failed to list pods in {}: {}", NAMESPACE, e);
                Ok(())
            }
        }
    }
}
