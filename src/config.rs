// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::{Args, Parser};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Flags shared by every demo binary
#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    /// Kubeconfig file location; in-cluster credentials are used when it cannot be loaded
    #[arg(long, default_value_os_t = default_kubeconfig_path())]
    pub kubeconfig: PathBuf,
}

/// Pod polling loop
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct PollerArgs {
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Delay between list calls in milliseconds (0 polls without pausing)
    #[arg(long, default_value_t = 0)]
    pub interval_ms: u64,

    /// Stop after this many iterations instead of polling forever
    #[arg(long)]
    pub max_iterations: Option<u64>,
}

impl PollerArgs {
    pub fn interval(&self) -> Option<Duration> {
        (self.interval_ms > 0).then(|| Duration::from_millis(self.interval_ms))
    }
}

/// Deployment create/update/delete script
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct CrudArgs {
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Do not wait for Enter between steps
    #[arg(long)]
    pub non_interactive: bool,

    /// Block after the foreground delete until the deployment is gone
    #[arg(long)]
    pub wait_for_deletion: bool,

    /// Upper bound for --wait-for-deletion, in seconds
    #[arg(long, default_value_t = 60)]
    pub deletion_timeout_secs: u64,
}

impl CrudArgs {
    pub fn deletion_wait(&self) -> Option<Duration> {
        self.wait_for_deletion
            .then(|| Duration::from_secs(self.deletion_timeout_secs))
    }
}

/// `$KUBECONFIG` (first entry) if set, otherwise `$HOME/.kube/config`
pub fn default_kubeconfig_path() -> PathBuf {
    if let Some(path) = env::var_os("KUBECONFIG")
        .and_then(|paths| env::split_paths(&paths).find(|p| !p.as_os_str().is_empty()))
    {
        return path;
    }

    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".kube")
        .join("config")
}
