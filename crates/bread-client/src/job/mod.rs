//!
//! # Job manager
//!
//! Submission and lifecycle of run-once task Jobs. A Job is created once
//! from its [`TaskSpec`] translation and deleted explicitly; there is no
//! update operation. Execution and completion state belong to the cluster.
//!
use k8s_openapi::api::batch::v1::Job;
use tracing::debug;
use tracing::instrument;

use bread_metadata::TaskSpec;

use crate::client::{ClusterClient, SharedClusterClient};
use crate::error::ClientError;

mod observe;
mod resolve;

pub use observe::JobObserver;
pub use resolve::PodResolver;

pub struct JobManager<C> {
    client: SharedClusterClient<C>,
}

impl<C: ClusterClient> JobManager<C> {
    pub fn new(client: SharedClusterClient<C>) -> Self {
        Self { client }
    }

    /// Translate the task descriptor and create its Job. Duplicate names
    /// conflict.
    #[instrument(skip(self, task), fields(task = %task.name))]
    pub async fn submit(&self, namespace: &str, task: &TaskSpec) -> Result<Job, ClientError> {
        let job = task.to_job();
        debug!(namespace, image = %task.image, "submitting task job");
        self.client.create_job(namespace, job).await
    }

    /// Direct passthrough read of the Job record.
    #[instrument(skip(self))]
    pub async fn info(&self, namespace: &str, name: &str) -> Result<Job, ClientError> {
        self.client.get_job(namespace, name).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, namespace: &str, name: &str) -> Result<(), ClientError> {
        self.client.delete_job(namespace, name).await
    }

    /// All Jobs across every namespace.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Job>, ClientError> {
        self.client.list_jobs().await
    }
}
