// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed clients for the `iot.enmasse.io/v1alpha1` API group.

pub mod iot_configs;

pub use iot_configs::IoTConfigs;

use crate::error::Result;
use kube::Client;
use tracing::debug;

/// Anything that can hand out an [`IoTConfigs`] accessor for a namespace.
pub trait IoTConfigsGetter {
    fn iot_configs(&self, namespace: &str) -> IoTConfigs;
}

/// Group client for `iot.enmasse.io/v1alpha1`, sharing one kube [`Client`] across resources.
#[derive(Clone)]
pub struct IotV1alpha1Client {
    client: Client,
}

impl IotV1alpha1Client {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client from the inferred kubeconfig or in-cluster environment
    pub async fn try_default() -> Result<Self> {
        let client = Client::try_default().await?;
        debug!(
            "Created IoT client, default namespace {}",
            client.default_namespace()
        );
        Ok(Self::new(client))
    }

    /// The underlying REST client
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }
}

impl IoTConfigsGetter for IotV1alpha1Client {
    fn iot_configs(&self, namespace: &str) -> IoTConfigs {
        IoTConfigs::new(self.client.clone(), namespace)
    }
}

impl From<Client> for IotV1alpha1Client {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}
