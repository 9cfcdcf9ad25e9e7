//! Reconciler configuration and resource label keys

use serde::Deserialize;

/// Environment variable overriding the workloads namespace
const WORKLOADS_NAMESPACE_ENV: &str = "CF_WORKLOADS_NAMESPACE";

/// Process-wide configuration consumed by the reconciler
///
/// Resolved once by the caller before any reconciliation; this crate never
/// re-reads configuration mid-operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Namespace the Route resources live in
    #[serde(default = "default_workloads_namespace")]
    pub workloads_namespace: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            workloads_namespace: default_workloads_namespace(),
        }
    }
}

impl SyncConfig {
    /// Build configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let workloads_namespace = std::env::var(WORKLOADS_NAMESPACE_ENV)
            .unwrap_or_else(|_| default_workloads_namespace());
        Self {
            workloads_namespace,
        }
    }
}

fn default_workloads_namespace() -> String {
    "cf-workloads".to_string()
}

/// Label keys and fixed values stamped onto managed Route resources
///
/// Labels identify the managing system and the owning route/space/org/domain
/// for discovery and filtering; resource identity is name + namespace.
pub mod labels {
    pub const NAME: &str = "app.kubernetes.io/name";
    pub const VERSION: &str = "app.kubernetes.io/version";
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
    pub const COMPONENT: &str = "app.kubernetes.io/component";
    pub const PART_OF: &str = "app.kubernetes.io/part-of";
    pub const ORG_GUID: &str = "cloudfoundry.org/org_guid";
    pub const SPACE_GUID: &str = "cloudfoundry.org/space_guid";
    pub const DOMAIN_GUID: &str = "cloudfoundry.org/domain_guid";
    pub const ROUTE_GUID: &str = "cloudfoundry.org/route_guid";
    pub const APP_GUID: &str = "cloudfoundry.org/app_guid";
    pub const PROCESS_TYPE: &str = "cloudfoundry.org/process_type";

    pub const VERSION_VALUE: &str = "0.0.0";
    pub const MANAGED_BY_VALUE: &str = "cloudfoundry";
    pub const COMPONENT_VALUE: &str = "cf-networking";
    pub const PART_OF_VALUE: &str = "cloudfoundry";
}
