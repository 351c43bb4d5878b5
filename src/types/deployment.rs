// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The demo Deployment, as a typed object and as an unstructured document

use crate::constants::deployment::{
    APP_LABEL, CONTAINER_IMAGE, CONTAINER_NAME, CONTAINER_PORT, INITIAL_REPLICAS, NAME,
};
use crate::kubernetes::dynamic::{deployments_resource, nested_field};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::{DynamicObject, ObjectMeta};
use serde_json::json;
use std::collections::BTreeMap;

/// JSON path of the replica count inside a Deployment
pub const REPLICAS_PATH: [&str; 2] = ["spec", "replicas"];

/// Build the demo Deployment for the typed client
pub fn typed_deployment() -> Deployment {
    let labels = BTreeMap::from([("app".to_string(), APP_LABEL.to_string())]);

    Deployment {
        metadata: ObjectMeta {
            name: Some(NAME.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(INITIAL_REPLICAS),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    name: Some("client-go-deployment-pod".to_string()),
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: CONTAINER_NAME.to_string(),
                        image: Some(CONTAINER_IMAGE.to_string()),
                        ports: Some(vec![ContainerPort {
                            name: Some("http".to_string()),
                            container_port: CONTAINER_PORT,
                            protocol: Some("TCP".to_string()),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the demo Deployment for the dynamic client
pub fn dynamic_deployment() -> DynamicObject {
    DynamicObject::new(NAME, &deployments_resource()).data(json!({
        "spec": {
            "replicas": INITIAL_REPLICAS,
            "selector": {
                "matchLabels": { "app": APP_LABEL }
            },
            "template": {
                "metadata": {
                    "labels": {
                        "app": APP_LABEL,
                        "name": "demo-pod-deployment"
                    }
                },
                "spec": {
                    "containers": [{
                        "name": CONTAINER_NAME,
                        "image": CONTAINER_IMAGE,
                        "ports": [{
                            "name": "http",
                            "protocol": "TCP",
                            "containerPort": CONTAINER_PORT
                        }]
                    }]
                }
            }
        }
    }))
}

/// Desired replica count of a typed Deployment
pub fn replicas(deployment: &Deployment) -> Option<i32> {
    deployment.spec.as_ref().and_then(|s| s.replicas)
}

/// Desired replica count of an unstructured Deployment
pub fn dynamic_replicas(deployment: &DynamicObject) -> Option<i64> {
    nested_field(&deployment.data, &REPLICAS_PATH).and_then(|v| v.as_i64())
}
