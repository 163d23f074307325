// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API coordinates of the IoTConfig resource
pub mod api {
    pub const GROUP: &str = "iot.enmasse.io";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "IoTConfig";
    pub const PLURAL: &str = "iotconfigs";
    /// Subresource the operator writes its observed state to
    pub const STATUS_SUBRESOURCE: &str = "status";
}

/// Phases the IoT operator reports in `status.phase`
pub mod phases {
    pub const ACTIVE: &str = "Active";
    pub const FAILED: &str = "Failed";
}

/// Field manager used for server-side apply
pub const FIELD_MANAGER: &str = "enmasse-iot";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
