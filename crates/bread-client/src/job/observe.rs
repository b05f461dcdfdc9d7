//!
//! # Log and status gateway
//!
//! Read-only accessors over a Job's runtime pod, built atop ownership
//! resolution. Nothing here produces side effects.
//!
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use tracing::instrument;

use crate::client::{ClusterClient, SharedClusterClient};
use crate::error::ClientError;

use super::PodResolver;

pub struct JobObserver<C> {
    client: SharedClusterClient<C>,
    resolver: PodResolver<C>,
}

impl<C: ClusterClient> JobObserver<C> {
    pub fn new(client: SharedClusterClient<C>) -> Self {
        Self {
            resolver: PodResolver::new(client.clone()),
            client,
        }
    }

    /// Logs of the pod produced by the named Job. Fails with
    /// [`ClientError::PodNotScheduled`] while no pod correlates to the
    /// Job yet; logs cannot be fetched with no identified source.
    #[instrument(skip(self))]
    pub async fn logs(&self, namespace: &str, job_name: &str) -> Result<String, ClientError> {
        let Some(pod_name) = self.resolver.pod_name(namespace, job_name).await? else {
            return Err(ClientError::PodNotScheduled {
                job: job_name.to_owned(),
            });
        };
        self.client.pod_logs(namespace, &pod_name).await
    }

    /// Direct passthrough read of the Job record.
    #[instrument(skip(self))]
    pub async fn job_info(&self, namespace: &str, name: &str) -> Result<Job, ClientError> {
        self.client.get_job(namespace, name).await
    }

    /// The resolved pod record, passed through. `Ok(None)` while no pod
    /// correlates to the Job yet.
    #[instrument(skip(self))]
    pub async fn pod_info(
        &self,
        namespace: &str,
        job_name: &str,
    ) -> Result<Option<Pod>, ClientError> {
        self.resolver.resolve(namespace, job_name).await
    }
}
