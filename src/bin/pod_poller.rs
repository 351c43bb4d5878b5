// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_crud_demo::config::PollerArgs;
use kube_crud_demo::console::Console;
use kube_crud_demo::demos::PodPoller;
use kube_crud_demo::kubernetes::create_client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = PollerArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let client = create_client(&args.cluster.kubeconfig)
        .await
        .context("Failed to connect to the cluster")?;
    info!("Connected to Kubernetes cluster");

    // The poller never waits for input
    PodPoller::new(client, Console::stdio(false))
        .with_interval(args.interval())
        .with_max_iterations(args.max_iterations)
        .run()
        .await?;

    Ok(())
}
