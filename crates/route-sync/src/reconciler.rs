//! Reconciles platform routes against their cluster Route resources
//!
//! The platform invokes one operation per route lifecycle event: create when
//! a route is created, update_destinations when its mapping set changes,
//! delete when the route is deleted. No state is kept between invocations;
//! the cluster resource, addressed by name and namespace, is the only store.
//!
//! ## Concurrency
//!
//! Remote calls are awaited strictly in sequence; there is no internal
//! concurrency. Other writers may touch the same named resource between a
//! fetch and its submit. The update path's bounded re-fetch loop is the only
//! mechanism that handles this: the apiserver's resourceVersion check rejects
//! the stale write, and the loop discards the stale copy for a fresh read.

use tracing::{debug, warn};

use crate::client::{ClientError, RouteResourceClient};
use crate::config::SyncConfig;
use crate::crd;
use crate::destinations::build_destinations;
use crate::model::Route;
use crate::resource::desired_route;

/// Total fetch/submit attempts for a destination update before a
/// persistently conflicting writer wins
pub const UPDATE_DESTINATIONS_ATTEMPTS: u32 = 3;

/// Drives Route resource lifecycle operations against the cluster
pub struct RouteReconciler<C> {
    client: C,
    config: SyncConfig,
}

impl<C: RouteResourceClient> RouteReconciler<C> {
    pub fn new(client: C, config: SyncConfig) -> Self {
        Self { client, config }
    }

    /// Create the Route resource for a newly created route.
    ///
    /// The resource is created with an empty destination list; destinations
    /// are attached by a later [`update_destinations`](Self::update_destinations)
    /// call. One create call, no retry: a duplicate-create rejection points
    /// at a caller bug and is surfaced unchanged.
    pub async fn create_route(&self, route: &Route) -> Result<crd::Route, ClientError> {
        let desired = desired_route(route, &self.config.workloads_namespace);

        match self.client.create_route(&desired).await {
            Ok(created) => {
                debug!(route_guid = %route.guid, "Created route resource");
                Ok(created)
            }
            Err(err) => {
                warn!(route_guid = %route.guid, error = %err, "Failed to create route resource");
                Err(err)
            }
        }
    }

    /// Re-sync the resource's destination list from the route's current
    /// mappings.
    ///
    /// Read-modify-write: fetch the live resource, overwrite its destinations
    /// with the freshly mapped sequence, submit the replacement. A conflicting
    /// concurrent write consumes one attempt and re-enters the loop with a
    /// fresh fetch, never the stale copy, up to
    /// [`UPDATE_DESTINATIONS_ATTEMPTS`] attempts total. Exhaustion surfaces
    /// the conflict; any other failure surfaces immediately.
    ///
    /// The caller must have created the resource before the first update for
    /// a given route.
    pub async fn update_destinations(&self, route: &Route) -> Result<crd::Route, ClientError> {
        let namespace = &self.config.workloads_namespace;
        let mut attempts_remaining = UPDATE_DESTINATIONS_ATTEMPTS;

        loop {
            let mut resource = match self.client.get_route(&route.guid, namespace).await {
                Ok(resource) => resource,
                Err(err) => {
                    warn!(
                        route_guid = %route.guid,
                        error = %err,
                        "Failed to fetch route resource for destination update"
                    );
                    return Err(err);
                }
            };

            resource.spec.destinations = build_destinations(route);

            match self.client.update_route(&resource).await {
                Ok(updated) => {
                    debug!(
                        route_guid = %route.guid,
                        destinations = updated.spec.destinations.len(),
                        "Updated route destinations"
                    );
                    return Ok(updated);
                }
                Err(err @ ClientError::Conflict { .. }) => {
                    attempts_remaining -= 1;
                    if attempts_remaining == 0 {
                        warn!(
                            route_guid = %route.guid,
                            attempts = UPDATE_DESTINATIONS_ATTEMPTS,
                            error = %err,
                            "Failed to update route destinations after repeated conflicts"
                        );
                        return Err(err);
                    }
                    debug!(
                        route_guid = %route.guid,
                        attempts_remaining,
                        "Conflicting write detected, re-fetching route resource"
                    );
                }
                Err(err) => {
                    warn!(
                        route_guid = %route.guid,
                        error = %err,
                        "Failed to update route destinations"
                    );
                    return Err(err);
                }
            }
        }
    }

    /// Delete the Route resource for a deleted route.
    ///
    /// One delete call, no retry. A missing resource is a failure the caller
    /// hears about, not something swallowed; callers already know whether the
    /// resource exists.
    pub async fn delete_route(&self, route: &Route) -> Result<(), ClientError> {
        match self
            .client
            .delete_route(&route.guid, &self.config.workloads_namespace)
            .await
        {
            Ok(()) => {
                debug!(route_guid = %route.guid, "Deleted route resource");
                Ok(())
            }
            Err(err) => {
                warn!(route_guid = %route.guid, error = %err, "Failed to delete route resource");
                Err(err)
            }
        }
    }
}
