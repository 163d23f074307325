// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed Kubernetes client for the EnMasse `IoTConfig` custom resource.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use client::{IoTConfigs, IoTConfigsGetter, IotV1alpha1Client};
pub use error::{IotError, Result};
pub use types::{IoTConfig, IoTConfigList, IoTConfigSpec, IoTConfigStatus};
