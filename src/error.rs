// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IotError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to encode request body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IoTConfig has no name set in metadata")]
    MissingName,

    #[error("Failed to render CRD: {0}")]
    CrdRenderError(String),
}

impl IotError {
    /// HTTP status code returned by the API server, if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IotError::KubeError(kube::Error::Api(resp)) => Some(resp.code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409)
    }
}

pub type Result<T> = std::result::Result<T, IotError>;
