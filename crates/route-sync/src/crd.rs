//! Route custom resource types
//!
//! The cluster-native representation of a platform route. One resource per
//! route, named by the route guid, living in the workloads namespace.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Route spec - the desired routing rule for one platform route
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "networking.cloudfoundry.org",
    version = "v1alpha1",
    kind = "Route",
    plural = "routes",
    namespaced,
    printcolumn = r#"{"name":"Host", "type":"string", "jsonPath":".spec.host"}"#,
    printcolumn = r#"{"name":"URL", "type":"string", "jsonPath":".spec.url"}"#
)]
pub struct RouteSpec {
    /// Hostname portion of the route; empty for root routes
    pub host: String,
    /// Path portion; empty when the route has no path
    pub path: String,
    /// Full URL: fqdn followed by the path
    pub url: String,
    pub domain: RouteDomain,
    /// Backends in platform mapping order
    pub destinations: Vec<Destination>,
}

/// Domain the route is registered on
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct RouteDomain {
    pub name: String,
    /// Internal domains are routable only inside the cluster
    pub internal: bool,
}

/// One routable backend: a process of an application
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Destination {
    /// The route-mapping guid this destination was derived from
    pub guid: String,
    pub port: u32,
    /// Omitted entirely when the mapping carries no weight; a zero weight
    /// is still emitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    pub app: DestinationApp,
    pub selector: DestinationSelector,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct DestinationApp {
    pub guid: String,
    pub process: DestinationProcess,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct DestinationProcess {
    #[serde(rename = "type")]
    pub type_: String,
}

/// Pod selector for the destination's workload
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSelector {
    pub match_labels: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(weight: Option<u32>) -> Destination {
        let mut match_labels = BTreeMap::new();
        match_labels.insert("cloudfoundry.org/app_guid".to_string(), "app-1".to_string());
        match_labels.insert("cloudfoundry.org/process_type".to_string(), "web".to_string());
        Destination {
            guid: "dst-1".to_string(),
            port: 8080,
            weight,
            app: DestinationApp {
                guid: "app-1".to_string(),
                process: DestinationProcess {
                    type_: "web".to_string(),
                },
            },
            selector: DestinationSelector { match_labels },
        }
    }

    #[test]
    fn test_deserialize_route_spec() {
        let yaml = r#"
host: myapp
path: /api
url: myapp.example.com/api
domain:
  name: example.com
  internal: false
destinations:
  - guid: dst-1
    port: 8080
    weight: 80
    app:
      guid: app-1
      process:
        type: web
    selector:
      matchLabels:
        cloudfoundry.org/app_guid: app-1
        cloudfoundry.org/process_type: web
"#;
        let spec: RouteSpec = serde_yaml::from_str(yaml).expect("test YAML should parse successfully");
        assert_eq!(spec.host, "myapp");
        assert_eq!(spec.url, "myapp.example.com/api");
        assert!(!spec.domain.internal);
        assert_eq!(spec.destinations.len(), 1);
        assert_eq!(spec.destinations[0].weight, Some(80));
        assert_eq!(spec.destinations[0].app.process.type_, "web");
        assert_eq!(
            spec.destinations[0].selector.match_labels["cloudfoundry.org/app_guid"],
            "app-1"
        );
    }

    #[test]
    fn test_absent_weight_is_omitted() {
        let value = serde_json::to_value(destination(None)).expect("serializes");
        let object = value.as_object().expect("destination is an object");
        assert!(!object.contains_key("weight"));
    }

    #[test]
    fn test_zero_weight_is_emitted() {
        let value = serde_json::to_value(destination(Some(0))).expect("serializes");
        assert_eq!(value["weight"], 0);
    }

    #[test]
    fn test_process_type_serializes_as_type() {
        let value = serde_json::to_value(destination(None)).expect("serializes");
        assert_eq!(value["app"]["process"]["type"], "web");
    }
}
