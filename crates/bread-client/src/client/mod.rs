//!
//! # Cluster client seam
//!
//! One trait method per remote round trip the managers perform. The
//! Kubernetes implementation in [`k8`] is the production path; [`memory`]
//! holds an in-process implementation backing the test suites.
//!
use std::sync::Arc;

use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::core::v1::Pod;

use bread_metadata::Bread;

use crate::error::ClientError;

pub mod k8;
pub mod memory;

pub use k8::K8ClusterClient;
pub use memory::MemoryClient;

pub type SharedClusterClient<C> = Arc<C>;

/// Typed access to the control-plane objects this system manages.
///
/// Every method is a single logical unit of work against remote cluster
/// state. Nothing is retried or cached here, and no method carries a
/// timeout of its own; consistency is entirely delegated to the control
/// plane.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClientError>;
    async fn get_namespace(&self, name: &str) -> Result<Namespace, ClientError>;
    async fn create_namespace(&self, namespace: Namespace) -> Result<Namespace, ClientError>;
    async fn delete_namespace(&self, name: &str) -> Result<(), ClientError>;

    async fn create_job(&self, namespace: &str, job: Job) -> Result<Job, ClientError>;
    async fn get_job(&self, namespace: &str, name: &str) -> Result<Job, ClientError>;
    async fn delete_job(&self, namespace: &str, name: &str) -> Result<(), ClientError>;
    /// Jobs across all namespaces.
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError>;

    /// Pods across all namespaces. Ownership resolution scans this listing
    /// in full on every call.
    async fn list_pods(&self) -> Result<Vec<Pod>, ClientError>;
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, ClientError>;
    async fn pod_logs(&self, namespace: &str, name: &str) -> Result<String, ClientError>;

    async fn create_bread(&self, namespace: &str, bread: Bread) -> Result<Bread, ClientError>;
    async fn get_bread(&self, namespace: &str, name: &str) -> Result<Bread, ClientError>;
    /// Read through the status subresource endpoint.
    async fn get_bread_status(&self, namespace: &str, name: &str) -> Result<Bread, ClientError>;
    async fn delete_bread(&self, namespace: &str, name: &str) -> Result<(), ClientError>;
    async fn list_breads(&self, namespace: &str) -> Result<Vec<Bread>, ClientError>;
}
