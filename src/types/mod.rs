// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource types served by the `iot.enmasse.io` API group.

pub mod iot_config;

pub use iot_config::{Adapter, IoTConfig, IoTConfigList, IoTConfigSpec, IoTConfigStatus};
