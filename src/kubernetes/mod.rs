// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD discovery and manifest generation for IoTConfig.

pub mod crd;

pub use crd::{iot_config_crd, render_crd_yaml, wait_for_iot_config_crd};
