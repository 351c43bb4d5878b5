// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment operations through the dynamic client: `Api<DynamicObject>`
//! addressed by group/version/resource, with unstructured JSON bodies.

use crate::constants::{deployment::NAME, NAMESPACE};
use crate::demos::DeploymentClient;
use crate::error::{DemoError, Result};
use crate::kubernetes::dynamic::{deployments_resource, pods_resource, set_nested_field};
use crate::kubernetes::{default_backoff, delete_foreground, retry_on_conflict};
use crate::types::deployment::{dynamic_deployment, dynamic_replicas, REPLICAS_PATH};
use kube::{
    api::{DynamicObject, ListParams, PostParams},
    Api, Client, ResourceExt,
};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub struct DynamicDeployments {
    deployments: Api<DynamicObject>,
    pods: Api<DynamicObject>,
}

impl DynamicDeployments {
    pub fn new(client: Client) -> Self {
        Self {
            deployments: Api::namespaced_with(client.clone(), NAMESPACE, &deployments_resource()),
            pods: Api::namespaced_with(client, NAMESPACE, &pods_resource()),
        }
    }
}

fn names(objects: &[DynamicObject]) -> Vec<String> {
    objects.iter().map(|o| o.name_any()).collect()
}

impl DeploymentClient for DynamicDeployments {
    #[instrument(skip(self))]
    async fn create(&self) -> Result<String> {
        let created = self
            .deployments
            .create(&PostParams::default(), &dynamic_deployment())
            .await?;
        Ok(created.name_any())
    }

    #[instrument(skip(self))]
    async fn scale(&self, replicas: i32) -> Result<()> {
        let deployments = &self.deployments;

        let updated = retry_on_conflict(default_backoff(), || async move {
            let mut latest = deployments.get(NAME).await?;
            debug!(
                "Got {} at resourceVersion {:?}",
                NAME,
                latest.resource_version()
            );

            set_nested_field(&mut latest.data, json!(replicas), &REPLICAS_PATH)?;

            Ok::<_, DemoError>(
                deployments
                    .replace(NAME, &PostParams::default(), &latest)
                    .await?,
            )
        })
        .await?;

        info!(
            "Deployment {} now wants {:?} replicas",
            NAME,
            dynamic_replicas(&updated)
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, wait: Option<Duration>) -> Result<()> {
        delete_foreground(&self.deployments, NAME, wait).await
    }

    async fn deployment_names(&self) -> Result<Vec<String>> {
        let list = self.deployments.list(&ListParams::default()).await?;
        Ok(names(&list.items))
    }

    async fn pod_names(&self) -> Result<Vec<String>> {
        let list = self.pods.list(&ListParams::default()).await?;
        Ok(names(&list.items))
    }
}
