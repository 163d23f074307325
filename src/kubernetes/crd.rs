// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking and manifest rendering

use crate::constants::api::{GROUP, KIND, VERSION};
use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::{IotError, Result};
use crate::types::IoTConfig;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{discovery::Discovery, Client, CustomResourceExt};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Wait for the IoTConfig CRD to become available in the cluster.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds.
pub async fn wait_for_iot_config_crd(client: &Client) -> Result<()> {
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match is_iot_config_crd_served(client).await {
            Ok(true) => {
                info!("IoTConfig CRD ({}/{}) is available", GROUP, VERSION);
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "IoTConfig CRD ({}/{}) not yet available, waiting {} seconds...",
                    GROUP, VERSION, interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for IoTConfig CRD: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        sleep(Duration::from_secs(interval)).await;

        interval = next_interval(interval);
    }
}

fn next_interval(interval: u64) -> u64 {
    (interval * 2).min(POLL_MAX_INTERVAL_SECS)
}

/// Check if the API server serves IoTConfig in the expected group version.
pub async fn is_iot_config_crd_served(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[GROUP])
        .run()
        .await?;

    let served = discovery
        .groups()
        .filter(|group| group.name() == GROUP)
        .flat_map(|group| group.recommended_resources())
        .any(|(ar, _)| ar.kind == KIND && ar.version == VERSION);

    Ok(served)
}

/// The CustomResourceDefinition generated from the IoTConfig types
pub fn iot_config_crd() -> CustomResourceDefinition {
    IoTConfig::crd()
}

/// Render the IoTConfig CRD as a YAML manifest
pub fn render_crd_yaml() -> Result<String> {
    serde_yaml::to_string(&iot_config_crd()).map_err(|e| IotError::CrdRenderError(e.to_string()))
}
