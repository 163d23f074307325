// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Namespace to operate on; falls back to the kube client's default namespace
    pub namespace: Option<String>,
    pub label_selector: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let namespace = non_empty(lookup("IOT_NAMESPACE"));
        let label_selector = non_empty(lookup("IOT_LABEL_SELECTOR"));

        if let Some(ns) = &namespace {
            validate_namespace(ns).with_context(|| format!("IOT_NAMESPACE is invalid: {}", ns))?;
        }

        Ok(Config {
            namespace,
            label_selector,
        })
    }

    /// Namespace to use, given the client's default
    pub fn namespace_or<'a>(&'a self, default_namespace: &'a str) -> &'a str {
        self.namespace.as_deref().unwrap_or(default_namespace)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Namespaces are RFC 1123 labels
fn validate_namespace(ns: &str) -> Result<()> {
    anyhow::ensure!(ns.len() <= 63, "longer than 63 characters");
    anyhow::ensure!(
        ns.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
        "must consist of lower case alphanumeric characters or '-'"
    );
    anyhow::ensure!(
        !ns.starts_with('-') && !ns.ends_with('-'),
        "must start and end with an alphanumeric character"
    );
    Ok(())
}
