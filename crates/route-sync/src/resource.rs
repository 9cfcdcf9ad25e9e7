//! Builds the desired Route resource for creation

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::config::labels;
use crate::crd;
use crate::model::Route;

/// Build the full desired resource for a newly created route.
///
/// The destination list is always empty here: resources are created bare and
/// destinations are attached by a later update, matching the platform's
/// create-then-attach lifecycle. The workloads namespace must already be
/// resolved by the caller.
pub fn desired_route(route: &Route, namespace: &str) -> crd::Route {
    crd::Route {
        metadata: ObjectMeta {
            name: Some(route.guid.clone()),
            namespace: Some(namespace.to_string()),
            labels: Some(route_labels(route)),
            ..Default::default()
        },
        spec: crd::RouteSpec {
            host: route.host.clone(),
            path: route.path.clone(),
            url: route.url(),
            domain: crd::RouteDomain {
                name: route.domain.name.clone(),
                internal: route.domain.internal,
            },
            destinations: Vec::new(),
        },
    }
}

/// Labels identifying the managing system and the owning
/// route/space/org/domain chain
fn route_labels(route: &Route) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert(labels::NAME.to_string(), route.guid.clone());
    map.insert(labels::VERSION.to_string(), labels::VERSION_VALUE.to_string());
    map.insert(
        labels::MANAGED_BY.to_string(),
        labels::MANAGED_BY_VALUE.to_string(),
    );
    map.insert(
        labels::COMPONENT.to_string(),
        labels::COMPONENT_VALUE.to_string(),
    );
    map.insert(labels::PART_OF.to_string(), labels::PART_OF_VALUE.to_string());
    map.insert(
        labels::ORG_GUID.to_string(),
        route.space.organization_guid.clone(),
    );
    map.insert(labels::SPACE_GUID.to_string(), route.space.guid.clone());
    map.insert(labels::DOMAIN_GUID.to_string(), route.domain.guid.clone());
    map.insert(labels::ROUTE_GUID.to_string(), route.guid.clone());
    map
}
