// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaced accessor for IoTConfig resources.
//!
//! Every operation is a single request against
//! `/apis/iot.enmasse.io/v1alpha1/namespaces/{namespace}/iotconfigs`. Errors from the
//! API server are passed through unchanged.

use crate::constants::FIELD_MANAGER;
use crate::error::{IotError, Result};
use crate::types::{IoTConfig, IoTConfigList};
use futures::stream::BoxStream;
use futures::{Stream, StreamExt, TryStreamExt};
use kube::{
    api::{DeleteParams, GetParams, ListParams, Patch, PatchParams, PostParams, WatchEvent, WatchParams},
    runtime::watcher,
    Api, Client, Resource,
};
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct IoTConfigs {
    api: Api<IoTConfig>,
    namespace: String,
}

impl IoTConfigs {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Collection path of IoTConfigs in this namespace
    pub fn url_path(&self) -> String {
        IoTConfig::url_path(&(), Some(&self.namespace))
    }

    /// Get the IoTConfig with the given name
    #[instrument(skip(self, gp), fields(namespace = %self.namespace))]
    pub async fn get(&self, name: &str, gp: &GetParams) -> Result<IoTConfig> {
        debug!("Getting IoTConfig {}/{}", self.namespace, name);
        Ok(self.api.get_with(name, gp).await?)
    }

    /// Get the IoTConfig with the given name, or `None` if it does not exist
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn get_opt(&self, name: &str) -> Result<Option<IoTConfig>> {
        debug!("Looking up IoTConfig {}/{}", self.namespace, name);
        Ok(self.api.get_opt(name).await?)
    }

    /// List the IoTConfigs matching the label and field selectors in `lp`
    #[instrument(skip(self, lp), fields(namespace = %self.namespace))]
    pub async fn list(&self, lp: &ListParams) -> Result<IoTConfigList> {
        let list = self.api.list(lp).await?;
        debug!(
            "Listed {} IoTConfigs in namespace {}",
            list.items.len(),
            self.namespace
        );
        Ok(list)
    }

    /// Watch IoTConfigs from `resource_version` on.
    ///
    /// The stream ends when the server closes the watch; restarting it is up to the caller.
    #[instrument(skip(self, wp), fields(namespace = %self.namespace))]
    pub async fn watch(
        &self,
        wp: &WatchParams,
        resource_version: &str,
    ) -> Result<BoxStream<'static, Result<WatchEvent<IoTConfig>>>> {
        debug!(
            "Watching IoTConfigs in namespace {} from resource version {}",
            self.namespace, resource_version
        );
        let events = self.api.watch(wp, resource_version).await?;
        Ok(events.map_err(IotError::from).boxed())
    }

    /// Long-running watcher that re-lists and re-watches on its own
    pub fn watcher(
        &self,
        config: watcher::Config,
    ) -> impl Stream<Item = std::result::Result<watcher::Event<IoTConfig>, watcher::Error>> + Send {
        watcher(self.api.clone(), config)
    }

    /// Create an IoTConfig, returning the server's representation
    #[instrument(skip(self, pp, config), fields(namespace = %self.namespace))]
    pub async fn create(&self, pp: &PostParams, config: &IoTConfig) -> Result<IoTConfig> {
        let created = self.api.create(pp, config).await?;
        info!(
            "Created IoTConfig {}/{}",
            self.namespace,
            created.metadata.name.as_deref().unwrap_or_default()
        );
        Ok(created)
    }

    /// Replace an IoTConfig, addressed by the name in its metadata
    #[instrument(skip(self, pp, config), fields(namespace = %self.namespace))]
    pub async fn update(&self, pp: &PostParams, config: &IoTConfig) -> Result<IoTConfig> {
        let name = object_name(config)?;
        debug!("Updating IoTConfig {}/{}", self.namespace, name);
        Ok(self.api.replace(name, pp, config).await?)
    }

    /// Replace the status subresource of an IoTConfig
    #[instrument(skip(self, pp, config), fields(namespace = %self.namespace))]
    pub async fn update_status(&self, pp: &PostParams, config: &IoTConfig) -> Result<IoTConfig> {
        let name = object_name(config)?;
        debug!("Updating status of IoTConfig {}/{}", self.namespace, name);
        let data = serde_json::to_vec(config)?;
        Ok(self.api.replace_status(name, pp, data).await?)
    }

    /// Delete an IoTConfig.
    ///
    /// Succeeds both when the object is gone and when deletion is pending finalizers.
    #[instrument(skip(self, dp), fields(namespace = %self.namespace))]
    pub async fn delete(&self, name: &str, dp: &DeleteParams) -> Result<()> {
        let res = self.api.delete(name, dp).await?;
        if res.is_left() {
            debug!("Deletion of IoTConfig {}/{} started", self.namespace, name);
        } else {
            info!("Deleted IoTConfig {}/{}", self.namespace, name);
        }
        Ok(())
    }

    /// Delete all IoTConfigs matching the selectors in `lp`
    #[instrument(skip(self, dp, lp), fields(namespace = %self.namespace))]
    pub async fn delete_collection(&self, dp: &DeleteParams, lp: &ListParams) -> Result<()> {
        let res = self.api.delete_collection(dp, lp).await?;
        if res.is_left() {
            debug!("Deletion of IoTConfigs in namespace {} started", self.namespace);
        } else {
            info!("Deleted IoTConfigs in namespace {}", self.namespace);
        }
        Ok(())
    }

    /// Patch an IoTConfig, or one of its subresources when `subresources` is not empty
    #[instrument(skip(self, pp, patch), fields(namespace = %self.namespace))]
    pub async fn patch<P: Serialize + Debug>(
        &self,
        name: &str,
        pp: &PatchParams,
        patch: &Patch<P>,
        subresources: &[&str],
    ) -> Result<IoTConfig> {
        debug!("Patching IoTConfig {}/{}", self.namespace, name);
        let patched = if subresources.is_empty() {
            self.api.patch(name, pp, patch).await?
        } else {
            self.api
                .patch_subresource(&subresources.join("/"), name, pp, patch)
                .await?
        };
        Ok(patched)
    }

    /// Server-side apply an IoTConfig as the crate's field manager
    #[instrument(skip(self, config), fields(namespace = %self.namespace))]
    pub async fn apply(&self, config: &IoTConfig, force: bool) -> Result<IoTConfig> {
        let name = object_name(config)?;
        let mut pp = PatchParams::apply(FIELD_MANAGER);
        if force {
            pp = pp.force();
        }
        self.patch(name, &pp, &Patch::Apply(config), &[]).await
    }
}

fn object_name(config: &IoTConfig) -> Result<&str> {
    config
        .metadata
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or(IotError::MissingName)
}
