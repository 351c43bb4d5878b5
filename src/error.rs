// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to resolve cluster configuration (kubeconfig: {kubeconfig}; in-cluster: {in_cluster})")]
    ConfigResolution { kubeconfig: String, in_cluster: String },

    #[error("Failed to build client: {0}")]
    ClientBuild(String),

    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("Invalid field path: {0}")]
    InvalidField(String),

    #[error("Timed out waiting for deletion of {0}")]
    DeletionTimeout(String),

    #[error("Waiting for deletion failed: {0}")]
    DeletionWait(#[from] kube::runtime::wait::Error),
}

impl DemoError {
    /// HTTP status code of a failed API call, if this error carries one
    pub fn api_status(&self) -> Option<u16> {
        match self {
            DemoError::KubeError(kube::Error::Api(err)) => Some(err.code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
