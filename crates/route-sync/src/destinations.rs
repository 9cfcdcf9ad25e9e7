//! Maps route mappings into Route resource destinations

use std::collections::BTreeMap;

use crate::config::labels;
use crate::crd::{Destination, DestinationApp, DestinationProcess, DestinationSelector};
use crate::model::Route;

/// Build the destination list for a route, one entry per mapping in
/// mapping order.
///
/// The selector carries the app-guid and process-type labels that
/// downstream service selection keys on. A mapping without a weight yields a
/// destination without one; a present zero weight is kept.
pub fn build_destinations(route: &Route) -> Vec<Destination> {
    route
        .mappings
        .iter()
        .map(|mapping| {
            let mut match_labels = BTreeMap::new();
            match_labels.insert(labels::APP_GUID.to_string(), mapping.app_guid.clone());
            match_labels.insert(
                labels::PROCESS_TYPE.to_string(),
                mapping.process_type.clone(),
            );

            Destination {
                guid: mapping.guid.clone(),
                port: mapping.presented_port(),
                weight: mapping.weight,
                app: DestinationApp {
                    guid: mapping.app_guid.clone(),
                    process: DestinationProcess {
                        type_: mapping.process_type.clone(),
                    },
                },
                selector: DestinationSelector { match_labels },
            }
        })
        .collect()
}
