// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment operations through the typed client (`Api<Deployment>`, `Api<Pod>`).

use crate::constants::{deployment::NAME, NAMESPACE};
use crate::demos::DeploymentClient;
use crate::error::{DemoError, Result};
use crate::kubernetes::{default_backoff, delete_foreground, retry_on_conflict};
use crate::types::deployment::{replicas, typed_deployment};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub struct TypedDeployments {
    deployments: Api<Deployment>,
    pods: Api<Pod>,
}

impl TypedDeployments {
    pub fn new(client: Client) -> Self {
        Self {
            deployments: Api::namespaced(client.clone(), NAMESPACE),
            pods: Api::namespaced(client, NAMESPACE),
        }
    }
}

impl DeploymentClient for TypedDeployments {
    #[instrument(skip(self))]
    async fn create(&self) -> Result<String> {
        let created = self
            .deployments
            .create(&PostParams::default(), &typed_deployment())
            .await?;
        Ok(created.name_any())
    }

    #[instrument(skip(self))]
    async fn scale(&self, replicas_wanted: i32) -> Result<()> {
        let deployments = &self.deployments;

        let updated = retry_on_conflict(default_backoff(), || async move {
            let mut latest = deployments.get(NAME).await?;
            debug!(
                "Got {} at resourceVersion {:?}",
                NAME,
                latest.resource_version()
            );

            latest.spec.get_or_insert_with(Default::default).replicas = Some(replicas_wanted);

            Ok::<_, DemoError>(
                deployments
                    .replace(NAME, &PostParams::default(), &latest)
                    .await?,
            )
        })
        .await?;

        info!("Deployment {} now wants {:?} replicas", NAME, replicas(&updated));
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, wait: Option<Duration>) -> Result<()> {
        delete_foreground(&self.deployments, NAME, wait).await
    }

    async fn deployment_names(&self) -> Result<Vec<String>> {
        let list = self.deployments.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(|d| d.name_any()).collect())
    }

    async fn pod_names(&self) -> Result<Vec<String>> {
        let list = self.pods.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(|p| p.name_any()).collect())
    }
}
