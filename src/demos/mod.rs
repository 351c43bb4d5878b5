// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The demo programs: a Pod polling loop and a Deployment CRUD script
//! runnable against either the typed or the dynamic client.

pub mod dynamic;
pub mod pods;
pub mod typed;

pub use dynamic::DynamicDeployments;
pub use pods::PodPoller;
pub use typed::TypedDeployments;

use crate::console::Console;
use crate::constants::deployment::UPDATED_REPLICAS;
use crate::error::Result;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

/// Deployment and Pod operations the CRUD script needs from a client surface
#[allow(async_fn_in_trait)]
pub trait DeploymentClient {
    /// Create the demo deployment and return the name the server stored it under
    async fn create(&self) -> Result<String>;

    /// Set the replica count with a conflict-safe get, mutate, update cycle
    async fn scale(&self, replicas: i32) -> Result<()>;

    /// Delete the demo deployment with foreground propagation
    async fn delete(&self, wait: Option<Duration>) -> Result<()>;

    async fn deployment_names(&self) -> Result<Vec<String>>;

    async fn pod_names(&self) -> Result<Vec<String>>;
}

/// Create, list, update and delete the demo deployment, pausing between phases
pub struct CrudScript<C, R, W> {
    client: C,
    console: Console<R, W>,
    deletion_wait: Option<Duration>,
}

impl<C, R, W> CrudScript<C, R, W>
where
    C: DeploymentClient,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: C, console: Console<R, W>, deletion_wait: Option<Duration>) -> Self {
        Self {
            client,
            console,
            deletion_wait,
        }
    }

    /// Run every phase in order; the first failure aborts the script
    pub async fn run(mut self) -> Result<Console<R, W>> {
        self.console.pause().await?;

        self.console.line("Creating deployment....").await?;
        let name = self.client.create().await?;
        info!("Created deployment {}", name);
        self.console
            .line(&format!("Created Deployment : {}", name))
            .await?;
        self.listing().await?;
        self.console.pause().await?;

        self.console.line("Updating deployment....").await?;
        self.client.scale(UPDATED_REPLICAS).await?;
        self.console.line("deployment updated").await?;
        self.listing().await?;
        self.console.pause().await?;

        self.console.line("Deleting deployment....").await?;
        self.client.delete(self.deletion_wait).await?;
        self.console.line("deployment deleted").await?;
        self.listing().await?;
        self.console.pause().await?;

        Ok(self.console)
    }

    async fn listing(&mut self) -> Result<()> {
        self.console.line("\nListing deployment....").await?;
        let deployments = self.client.deployment_names().await?;
        self.console.names(&deployments).await?;

        self.console.line("\nListing pods....").await?;
        let pods = self.client.pod_names().await?;
        self.console.names(&pods).await
    }
}
