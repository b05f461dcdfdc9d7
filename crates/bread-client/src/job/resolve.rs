//!
//! # Ownership resolution
//!
//! Correlates a Job to its runtime pod by identity, not by naming
//! convention: the pod's back-reference UID is matched against the Job's
//! cluster-assigned UID. The pod is only observed here; its lifetime is
//! never managed through this relation.
//!
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use tracing::debug;
use tracing::instrument;

use crate::client::{ClusterClient, SharedClusterClient};
use crate::error::ClientError;

pub struct PodResolver<C> {
    client: SharedClusterClient<C>,
}

impl<C: ClusterClient> PodResolver<C> {
    pub fn new(client: SharedClusterClient<C>) -> Self {
        Self { client }
    }

    /// Find the pod produced by the named Job.
    ///
    /// Reads the Job (NotFound if it does not exist), then scans pods
    /// across the entire cluster and returns the first whose *first*
    /// owner-reference UID equals the Job's UID. `Ok(None)` is a normal
    /// outcome: the pod may simply not be scheduled yet.
    ///
    /// The scan is O(total pods in the cluster) per call, a
    /// correctness-over-efficiency choice suitable only at low call
    /// volume. Only the first owner reference is inspected, so a pod
    /// carrying multiple controlling references resolves
    /// order-dependently.
    #[instrument(skip(self))]
    pub async fn resolve(&self, namespace: &str, job_name: &str) -> Result<Option<Pod>, ClientError> {
        let job = self.client.get_job(namespace, job_name).await?;
        let Some(job_uid) = job.metadata.uid else {
            return Ok(None);
        };

        let pods = self.client.list_pods().await?;
        debug!(job = job_name, scanned = pods.len(), "scanning pods for owner");
        Ok(pods.into_iter().find(|pod| {
            pod.metadata
                .owner_references
                .as_deref()
                .and_then(<[OwnerReference]>::first)
                .is_some_and(|owner| owner.uid == job_uid)
        }))
    }

    /// Name-only variant of [`PodResolver::resolve`].
    pub async fn pod_name(
        &self,
        namespace: &str,
        job_name: &str,
    ) -> Result<Option<String>, ClientError> {
        Ok(self
            .resolve(namespace, job_name)
            .await?
            .and_then(|pod| pod.metadata.name))
    }
}
