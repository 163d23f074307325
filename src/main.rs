// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use futures::TryStreamExt;
use kube::runtime::{watcher, WatchStreamExt};
use kube::ResourceExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use enmasse_iot::client::{IoTConfigsGetter, IotV1alpha1Client};
use enmasse_iot::config::Config;
use enmasse_iot::kubernetes::{render_crd_yaml, wait_for_iot_config_crd};
use enmasse_iot::types::IoTConfig;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("crd") {
        print!("{}", render_crd_yaml()?);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let client = IotV1alpha1Client::try_default().await?;
    let namespace = config.namespace_or(client.default_namespace()).to_string();
    info!("Connected to Kubernetes cluster, using namespace {}", namespace);

    info!("Waiting for IoTConfig CRD to become available...");
    wait_for_iot_config_crd(client.client()).await?;

    let configs = client.iot_configs(&namespace);

    let mut wc = watcher::Config::default();
    if let Some(selector) = &config.label_selector {
        wc = wc.labels(selector);
    }

    // Counts objects of the current (re-)list; the watcher restarts it after expiry
    let mut listed = 0usize;
    let mut events = Box::pin(configs.watcher(wc).default_backoff());
    while let Some(event) = events.try_next().await? {
        match event {
            watcher::Event::Init => listed = 0,
            watcher::Event::InitApply(iot_config) => {
                listed += 1;
                log_config(&iot_config)
            }
            watcher::Event::InitDone => {
                info!("Found {} IoTConfigs in namespace {}", listed, namespace)
            }
            watcher::Event::Apply(iot_config) => log_config(&iot_config),
            watcher::Event::Delete(iot_config) => {
                info!("IoTConfig {} deleted", iot_config.name_any())
            }
        }
    }

    warn!("IoTConfig watch ended unexpectedly");
    Ok(())
}

fn log_config(iot_config: &IoTConfig) {
    if iot_config.is_failed() {
        warn!(
            "IoTConfig {} failed: {}",
            iot_config.name_any(),
            iot_config
                .status
                .as_ref()
                .and_then(|s| s.phase_reason.as_deref())
                .unwrap_or("no reason given")
        );
    } else {
        info!(
            "IoTConfig {}: phase={}, initialized={}",
            iot_config.name_any(),
            iot_config.phase().unwrap_or("Unknown"),
            iot_config.is_initialized()
        );
    }
}
