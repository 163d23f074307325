// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::core::ObjectList;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::phases;

/// Infrastructure configuration of the EnMasse IoT services in a namespace.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "iot.enmasse.io", version = "v1alpha1", kind = "IoTConfig")]
#[kube(plural = "iotconfigs", shortname = "iotc")]
#[kube(namespaced)]
#[kube(status = "IoTConfigStatus")]
#[serde(rename_all = "camelCase")]
pub struct IoTConfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_default_routes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_overrides: Option<BTreeMap<String, ImageOverride>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inter_service_certificates: Option<InterServiceCertificates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapters: Option<AdaptersConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesConfig>,
}

/// List of IoTConfigs as returned by the API server.
pub type IoTConfigList = ObjectList<IoTConfig>;

/// Protocol adapters an IoTConfig can switch on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adapter {
    Http,
    Mqtt,
    Sigfox,
    Lorawan,
}

impl Adapter {
    pub const ALL: [Adapter; 4] = [Adapter::Http, Adapter::Mqtt, Adapter::Sigfox, Adapter::Lorawan];

    /// Key used for this adapter in `spec.adapters` and `status.adapters`
    pub fn as_str(&self) -> &'static str {
        match self {
            Adapter::Http => "http",
            Adapter::Mqtt => "mqtt",
            Adapter::Sigfox => "sigfox",
            Adapter::Lorawan => "lorawan",
        }
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterServiceCertificates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_certificates_strategy: Option<SecretCertificatesStrategy>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretCertificatesStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_secret_name: Option<String>,
    #[serde(rename = "serviceCASecretName", skip_serializing_if = "Option::is_none")]
    pub service_ca_secret_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdaptersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<AdapterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mqtt: Option<AdapterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigfox: Option<AdapterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lorawan: Option<AdapterConfig>,
}

impl AdaptersConfig {
    pub fn get(&self, adapter: Adapter) -> Option<&AdapterConfig> {
        match adapter {
            Adapter::Http => self.http.as_ref(),
            Adapter::Mqtt => self.mqtt.as_ref(),
            Adapter::Sigfox => self.sigfox.as_ref(),
            Adapter::Lorawan => self.lorawan.as_ref(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_registry: Option<ServiceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ServiceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<ServiceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector: Option<ServiceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<ServiceConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IoTConfigStatus {
    #[serde(default)]
    pub initialized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_reason: Option<String>,
    #[serde(rename = "authenticationServicePSK", skip_serializing_if = "Option::is_none")]
    pub authentication_service_psk: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub adapters: BTreeMap<String, AdapterStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdapterStatus {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IoTConfigSpec {
    /// Adapters without explicit configuration are enabled
    pub fn is_adapter_enabled(&self, adapter: Adapter) -> bool {
        self.adapters
            .as_ref()
            .and_then(|a| a.get(adapter))
            .and_then(|c| c.enabled)
            .unwrap_or(true)
    }
}

impl IoTConfig {
    /// Phase reported by the operator, if any
    pub fn phase(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.phase.as_deref())
    }

    /// Check if the operator reports this config as active
    pub fn is_active(&self) -> bool {
        self.phase() == Some(phases::ACTIVE)
    }

    pub fn is_failed(&self) -> bool {
        self.phase() == Some(phases::FAILED)
    }

    pub fn is_initialized(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.initialized)
    }
}
