// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Group/version/resource addressing and unstructured field access for the dynamic client

use crate::error::{DemoError, Result};
use kube::core::GroupVersionKind;
use kube::discovery::ApiResource;
use serde_json::{Map, Value};

/// `apps/v1` deployments
pub fn deployments_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk("apps", "v1", "Deployment"), "deployments")
}

/// Core `v1` pods
pub fn pods_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk("", "v1", "Pod"), "pods")
}

/// Set `value` at the nested key `path` of `object`, creating missing intermediate maps.
///
/// Fails when something other than a map (or null) sits on the path.
pub fn set_nested_field(object: &mut Value, value: Value, path: &[&str]) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Err(DemoError::InvalidField("empty field path".to_string()));
    };

    let mut current = object;
    for (depth, key) in parents.iter().enumerate() {
        current = as_object_mut(current, &path[..depth])?
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    as_object_mut(current, parents)?.insert(last.to_string(), value);
    Ok(())
}

/// Read the value at the nested key `path` of `object`
pub fn nested_field<'a>(object: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(object, |current, key| current.get(key))
}

fn as_object_mut<'a>(value: &'a mut Value, at: &[&str]) -> Result<&'a mut Map<String, Value>> {
    if value.is_null() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut().ok_or_else(|| {
        DemoError::InvalidField(format!("value at .{} is not a map", at.join(".")))
    })
}
