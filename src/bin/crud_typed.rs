// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_crud_demo::config::CrudArgs;
use kube_crud_demo::console::Console;
use kube_crud_demo::demos::{CrudScript, TypedDeployments};
use kube_crud_demo::kubernetes::create_client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CrudArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let client = create_client(&args.cluster.kubeconfig)
        .await
        .context("Failed to connect to the cluster")?;
    info!("Connected to Kubernetes cluster");

    let console = Console::stdio(!args.non_interactive);
    CrudScript::new(TypedDeployments::new(client), console, args.deletion_wait())
        .run()
        .await
        .context("Deployment script failed")?;

    Ok(())
}
