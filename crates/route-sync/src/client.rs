//! Typed client for Route custom resources
//!
//! Wraps the cluster API behind a capability trait so the reconciler can be
//! handed a deterministic fake in tests. The concrete implementation maps
//! apiserver rejections onto a small typed taxonomy; everything it does not
//! recognize passes through unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use kube::api::{Api, DeleteParams, PostParams};
use kube::Client as KubeClient;
use thiserror::Error;
use tracing::debug;

use crate::crd::Route;

/// Trait for Route resource operations
///
/// This trait allows for mocking in tests while keeping the concrete
/// implementation for production use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteResourceClient: Send + Sync {
    /// Fetch a Route resource by name
    async fn get_route(&self, name: &str, namespace: &str) -> Result<Route, ClientError>;

    /// Create a new Route resource
    async fn create_route(&self, resource: &Route) -> Result<Route, ClientError>;

    /// Replace an existing Route resource
    ///
    /// The resource's resourceVersion drives the server-side
    /// optimistic-concurrency check; a stale copy is rejected with
    /// `ClientError::Conflict`.
    async fn update_route(&self, resource: &Route) -> Result<Route, ClientError>;

    /// Delete a Route resource by name
    async fn delete_route(&self, name: &str, namespace: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("conflicting write to route resource {name}")]
    Conflict { name: String },
    #[error("route resource {name} not found")]
    NotFound { name: String },
    #[error("route resource {name} already exists")]
    AlreadyExists { name: String },
    #[error("route resource missing required field: {0}")]
    MissingField(&'static str),
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),
}

impl ClientError {
    fn from_kube(name: &str, err: kube::Error) -> Self {
        match err {
            kube::Error::Api(ref response) if response.code == 409 => {
                if response.reason == "AlreadyExists" {
                    ClientError::AlreadyExists {
                        name: name.to_string(),
                    }
                } else {
                    ClientError::Conflict {
                        name: name.to_string(),
                    }
                }
            }
            kube::Error::Api(ref response) if response.code == 404 => ClientError::NotFound {
                name: name.to_string(),
            },
            other => ClientError::Kube(other),
        }
    }
}

/// Kubernetes-backed Route resource client
#[derive(Clone)]
pub struct KubeRouteClient {
    client: KubeClient,
}

impl KubeRouteClient {
    pub fn new(client: KubeClient) -> Self {
        Self { client }
    }

    fn routes(&self, namespace: &str) -> Api<Route> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

fn metadata_name(resource: &Route) -> Result<&str, ClientError> {
    resource
        .metadata
        .name
        .as_deref()
        .ok_or(ClientError::MissingField("metadata.name"))
}

fn metadata_namespace(resource: &Route) -> Result<&str, ClientError> {
    resource
        .metadata
        .namespace
        .as_deref()
        .ok_or(ClientError::MissingField("metadata.namespace"))
}

#[async_trait]
impl RouteResourceClient for KubeRouteClient {
    async fn get_route(&self, name: &str, namespace: &str) -> Result<Route, ClientError> {
        self.routes(namespace)
            .get(name)
            .await
            .map_err(|e| ClientError::from_kube(name, e))
    }

    async fn create_route(&self, resource: &Route) -> Result<Route, ClientError> {
        let name = metadata_name(resource)?;
        let namespace = metadata_namespace(resource)?;

        let created = self
            .routes(namespace)
            .create(&PostParams::default(), resource)
            .await
            .map_err(|e| ClientError::from_kube(name, e))?;

        debug!(name = %name, namespace = %namespace, "Created route resource");
        Ok(created)
    }

    async fn update_route(&self, resource: &Route) -> Result<Route, ClientError> {
        let name = metadata_name(resource)?;
        let namespace = metadata_namespace(resource)?;

        let updated = self
            .routes(namespace)
            .replace(name, &PostParams::default(), resource)
            .await
            .map_err(|e| ClientError::from_kube(name, e))?;

        debug!(name = %name, namespace = %namespace, "Replaced route resource");
        Ok(updated)
    }

    async fn delete_route(&self, name: &str, namespace: &str) -> Result<(), ClientError> {
        self.routes(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map_err(|e| ClientError::from_kube(name, e))?;

        debug!(name = %name, namespace = %namespace, "Deleted route resource");
        Ok(())
    }
}

/// Implement trait for Arc-wrapped clients to support shared ownership
#[async_trait]
impl<T: RouteResourceClient + ?Sized> RouteResourceClient for Arc<T> {
    async fn get_route(&self, name: &str, namespace: &str) -> Result<Route, ClientError> {
        (**self).get_route(name, namespace).await
    }

    async fn create_route(&self, resource: &Route) -> Result<Route, ClientError> {
        (**self).create_route(resource).await
    }

    async fn update_route(&self, resource: &Route) -> Result<Route, ClientError> {
        (**self).update_route(resource).await
    }

    async fn delete_route(&self, name: &str, namespace: &str) -> Result<(), ClientError> {
        (**self).delete_route(name, namespace).await
    }
}
