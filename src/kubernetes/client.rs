// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster configuration resolution and client creation

use crate::error::{DemoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Build a client from the kubeconfig at `path`, falling back to in-cluster credentials
#[instrument]
pub async fn create_client(path: &Path) -> Result<Client> {
    let config = resolve_config(path).await?;
    info!("Connecting to {}", config.cluster_url);

    Client::try_from(config).map_err(|e| DemoError::ClientBuild(e.to_string()))
}

/// Resolve connection configuration: kubeconfig file first, in-cluster second.
pub async fn resolve_config(path: &Path) -> Result<KConfig> {
    let kubeconfig_err = match config_from_kubeconfig(path).await {
        Ok(config) => return Ok(config),
        Err(e) => e,
    };

    warn!(
        "Could not load kubeconfig {}: {}, trying in-cluster configuration",
        path.display(),
        kubeconfig_err
    );

    KConfig::incluster().map_err(|e| DemoError::ConfigResolution {
        kubeconfig: kubeconfig_err,
        in_cluster: e.to_string(),
    })
}

/// Load the kubeconfig at `path`. Multi-document files are merged and relative
/// certificate, key and token file paths resolve against the file's directory.
async fn config_from_kubeconfig(path: &Path) -> std::result::Result<KConfig, String> {
    let owned = path.to_path_buf();
    let kubeconfig = tokio::task::spawn_blocking(move || Kubeconfig::read_from(owned))
        .await
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| format!("Failed to create config: {}", e))
}
