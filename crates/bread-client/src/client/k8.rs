//!
//! # Kubernetes client
//!
use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::core::v1::Pod;
use kube::Client;
use kube::api::Api;
use kube::api::DeleteParams;
use kube::api::ListParams;
use kube::api::LogParams;
use kube::api::PostParams;
use tracing::debug;

use bread_metadata::Bread;

use crate::error::{BREAD_KIND, ClientError, JOB_KIND, NAMESPACE_KIND, POD_KIND};

use super::ClusterClient;

/// [`ClusterClient`] backed by a real control plane through [`kube`].
///
/// Each method issues exactly one API call and surfaces its failure
/// unmodified, with 404/409 lifted into the typed error kinds.
#[derive(Clone)]
pub struct K8ClusterClient {
    client: Client,
}

impl std::fmt::Debug for K8ClusterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("K8ClusterClient").finish_non_exhaustive()
    }
}

impl K8ClusterClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn namespaces(&self) -> Api<Namespace> {
        Api::all(self.client.clone())
    }

    fn jobs(&self, namespace: &str) -> Api<Job> {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn breads(&self, namespace: &str) -> Api<Bread> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ClusterClient for K8ClusterClient {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClientError> {
        let list = self.namespaces().list(&ListParams::default()).await?;
        debug!(namespaces = list.items.len(), "listed namespaces");
        Ok(list.items)
    }

    async fn get_namespace(&self, name: &str) -> Result<Namespace, ClientError> {
        self.namespaces()
            .get(name)
            .await
            .map_err(|err| ClientError::for_object(NAMESPACE_KIND, name, err))
    }

    async fn create_namespace(&self, namespace: Namespace) -> Result<Namespace, ClientError> {
        let name = namespace.metadata.name.clone().unwrap_or_default();
        self.namespaces()
            .create(&PostParams::default(), &namespace)
            .await
            .map_err(|err| ClientError::for_object(NAMESPACE_KIND, &name, err))
    }

    async fn delete_namespace(&self, name: &str) -> Result<(), ClientError> {
        self.namespaces()
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|err| ClientError::for_object(NAMESPACE_KIND, name, err))
    }

    async fn create_job(&self, namespace: &str, job: Job) -> Result<Job, ClientError> {
        let name = job.metadata.name.clone().unwrap_or_default();
        self.jobs(namespace)
            .create(&PostParams::default(), &job)
            .await
            .map_err(|err| ClientError::for_object(JOB_KIND, &name, err))
    }

    async fn get_job(&self, namespace: &str, name: &str) -> Result<Job, ClientError> {
        self.jobs(namespace)
            .get(name)
            .await
            .map_err(|err| ClientError::for_object(JOB_KIND, name, err))
    }

    async fn delete_job(&self, namespace: &str, name: &str) -> Result<(), ClientError> {
        self.jobs(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|err| ClientError::for_object(JOB_KIND, name, err))
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let api: Api<Job> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items)
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClientError> {
        let api: Api<Pod> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        debug!(pods = list.items.len(), "listed pods cluster-wide");
        Ok(list.items)
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, ClientError> {
        self.pods(namespace)
            .get(name)
            .await
            .map_err(|err| ClientError::for_object(POD_KIND, name, err))
    }

    async fn pod_logs(&self, namespace: &str, name: &str) -> Result<String, ClientError> {
        self.pods(namespace)
            .logs(name, &LogParams::default())
            .await
            .map_err(|err| ClientError::for_object(POD_KIND, name, err))
    }

    async fn create_bread(&self, namespace: &str, bread: Bread) -> Result<Bread, ClientError> {
        let name = bread.metadata.name.clone().unwrap_or_default();
        self.breads(namespace)
            .create(&PostParams::default(), &bread)
            .await
            .map_err(|err| ClientError::for_object(BREAD_KIND, &name, err))
    }

    async fn get_bread(&self, namespace: &str, name: &str) -> Result<Bread, ClientError> {
        self.breads(namespace)
            .get(name)
            .await
            .map_err(|err| ClientError::for_object(BREAD_KIND, name, err))
    }

    async fn get_bread_status(&self, namespace: &str, name: &str) -> Result<Bread, ClientError> {
        self.breads(namespace)
            .get_status(name)
            .await
            .map_err(|err| ClientError::for_object(BREAD_KIND, name, err))
    }

    async fn delete_bread(&self, namespace: &str, name: &str) -> Result<(), ClientError> {
        self.breads(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|err| ClientError::for_object(BREAD_KIND, name, err))
    }

    async fn list_breads(&self, namespace: &str) -> Result<Vec<Bread>, ClientError> {
        let list = self.breads(namespace).list(&ListParams::default()).await?;
        Ok(list.items)
    }
}
