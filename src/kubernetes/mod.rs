// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, conflict-safe updates, deletion and dynamic addressing.

pub mod client;
pub mod deletion;
pub mod dynamic;
pub mod retry;

pub use client::{create_client, resolve_config};
pub use deletion::delete_foreground;
pub use retry::{default_backoff, is_conflict, retry_on_conflict};
