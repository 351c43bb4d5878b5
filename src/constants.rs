// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace every demo operates in
pub const NAMESPACE: &str = "default";

/// Demo deployment shape
pub mod deployment {
    pub const NAME: &str = "demo-deployment";
    /// Replica count on creation
    pub const INITIAL_REPLICAS: i32 = 2;
    /// Replica count written by the conflict-safe update
    pub const UPDATED_REPLICAS: i32 = 1;
    pub const APP_LABEL: &str = "demo";
    pub const CONTAINER_NAME: &str = "api-server";
    pub const CONTAINER_IMAGE: &str = "sayedppqq/api-server";
    pub const CONTAINER_PORT: i32 = 80;
}

/// Conflict retry configuration
pub mod retry {
    /// Total number of attempts, including the first one
    pub const MAX_ATTEMPTS: usize = 5;
    pub const BASE_DELAY_MILLIS: u64 = 10;
}

/// Text written to the console
pub mod console {
    pub const PAUSE_PROMPT: &str = "-> Press Enter to continue.";
    pub const POLL_BANNER: &str = ">>>>>>>>>>>>>>>>>>>>>>";
}
