//!
//! # Bread manager
//!
//! CRUD and status observation for the declarative Bread GPU task
//! resource. Status is produced by the external reconciler alone; this
//! manager only reads it. Unlike the Job path there is no automatic
//! task-to-pod correlation for breads, so the pod accessors take an
//! already-known pod name.
//!
use k8s_openapi::api::core::v1::Pod;
use tracing::debug;
use tracing::instrument;

use bread_metadata::Bread;
use bread_metadata::BreadSpec;
use bread_metadata::BreadStatus;

use crate::client::{ClusterClient, SharedClusterClient};
use crate::error::ClientError;

pub struct BreadManager<C> {
    client: SharedClusterClient<C>,
}

impl<C: ClusterClient> BreadManager<C> {
    pub fn new(client: SharedClusterClient<C>) -> Self {
        Self { client }
    }

    /// Submit a bread. Duplicate names in the namespace conflict.
    #[instrument(skip(self, spec))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        spec: BreadSpec,
    ) -> Result<Bread, ClientError> {
        debug!(namespace, name, gpu = spec.scv.gpu, "creating bread");
        let bread = Bread::new(name, spec);
        self.client.create_bread(namespace, bread).await
    }

    /// The full bread record.
    #[instrument(skip(self))]
    pub async fn get(&self, namespace: &str, name: &str) -> Result<Bread, ClientError> {
        self.client.get_bread(namespace, name).await
    }

    /// The status sub-value only, read through the status subresource.
    ///
    /// Fails with [`ClientError::StatusNotReady`] when the bread exists
    /// but the reconciler has not written a status yet; that condition is
    /// never conflated with [`ClientError::NotFound`].
    #[instrument(skip(self))]
    pub async fn status(&self, namespace: &str, name: &str) -> Result<BreadStatus, ClientError> {
        let bread = self.client.get_bread_status(namespace, name).await?;
        bread.status.ok_or_else(|| ClientError::StatusNotReady {
            name: name.to_owned(),
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, namespace: &str, name: &str) -> Result<(), ClientError> {
        self.client.delete_bread(namespace, name).await
    }

    /// All breads in the namespace, possibly empty.
    #[instrument(skip(self))]
    pub async fn list(&self, namespace: &str) -> Result<Vec<Bread>, ClientError> {
        self.client.list_breads(namespace).await
    }

    /// Logs of an already-known pod. No ownership resolution happens here.
    #[instrument(skip(self))]
    pub async fn pod_logs(&self, namespace: &str, pod_name: &str) -> Result<String, ClientError> {
        self.client.pod_logs(namespace, pod_name).await
    }

    /// Record of an already-known pod. No ownership resolution happens here.
    #[instrument(skip(self))]
    pub async fn pod_info(&self, namespace: &str, pod_name: &str) -> Result<Pod, ClientError> {
        self.client.get_pod(namespace, pod_name).await
    }
}
