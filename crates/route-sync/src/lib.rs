//! route-sync: reconciles platform routes into cluster Route custom resources
//!
//! The platform owns the route records; the cluster owns the Route custom
//! resources that the networking layer consumes. This crate computes the
//! desired resource for a route and drives create, destination-update, and
//! delete calls against the cluster API, retrying optimistic-concurrency
//! conflicts on the update path.

pub mod client;
pub mod config;
pub mod crd;
pub mod destinations;
pub mod model;
pub mod reconciler;
pub mod resource;

pub use client::{ClientError, KubeRouteClient, RouteResourceClient};
pub use config::SyncConfig;
pub use reconciler::RouteReconciler;
