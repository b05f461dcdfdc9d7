//!
//! # In-memory client
//!
//! [`ClusterClient`] over plain hash maps, mimicking the API server's
//! create/get/delete/list behavior closely enough for the manager test
//! suites: duplicate creates conflict and reads of absent objects are
//! NotFound, with job UIDs assigned at creation time. Pods are never
//! spawned spontaneously; tests insert them through the fixture methods
//! to simulate the scheduler.
//!
use std::collections::HashMap;
use std::sync::Arc;

use async_lock::RwLock;
use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::core::v1::Pod;
use uuid::Uuid;

use bread_metadata::Bread;
use bread_metadata::BreadStatus;

use crate::error::{BREAD_KIND, ClientError, JOB_KIND, NAMESPACE_KIND, POD_KIND};

use super::ClusterClient;

type ObjectKey = (String, String);

fn key(namespace: &str, name: &str) -> ObjectKey {
    (namespace.to_owned(), name.to_owned())
}

#[derive(Debug, Default)]
pub struct MemoryClient {
    namespaces: RwLock<HashMap<String, Namespace>>,
    jobs: RwLock<HashMap<ObjectKey, Job>>,
    pods: RwLock<HashMap<ObjectKey, Pod>>,
    pod_logs: RwLock<HashMap<ObjectKey, String>>,
    breads: RwLock<HashMap<ObjectKey, Bread>>,
}

impl MemoryClient {
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Place a pod into the store, as the scheduler would. The pod is keyed
    /// by its own metadata namespace/name.
    pub async fn insert_pod(&self, pod: Pod) {
        let namespace = pod.metadata.namespace.clone().unwrap_or_default();
        let name = pod.metadata.name.clone().unwrap_or_default();
        self.pods.write().await.insert((namespace, name), pod);
    }

    /// Attach log output to a stored pod.
    pub async fn set_pod_logs(&self, namespace: &str, name: &str, logs: impl Into<String>) {
        self.pod_logs
            .write()
            .await
            .insert(key(namespace, name), logs.into());
    }

    /// Write a bread status, as the external reconciler would.
    pub async fn set_bread_status(
        &self,
        namespace: &str,
        name: &str,
        status: BreadStatus,
    ) -> Result<(), ClientError> {
        let mut breads = self.breads.write().await;
        let bread = breads
            .get_mut(&key(namespace, name))
            .ok_or_else(|| ClientError::NotFound {
                kind: BREAD_KIND,
                name: name.to_owned(),
            })?;
        bread.status = Some(status);
        Ok(())
    }
}

#[async_trait]
impl ClusterClient for MemoryClient {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClientError> {
        Ok(self.namespaces.read().await.values().cloned().collect())
    }

    async fn get_namespace(&self, name: &str) -> Result<Namespace, ClientError> {
        self.namespaces
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                kind: NAMESPACE_KIND,
                name: name.to_owned(),
            })
    }

    async fn create_namespace(&self, namespace: Namespace) -> Result<Namespace, ClientError> {
        let name = namespace.metadata.name.clone().unwrap_or_default();
        let mut namespaces = self.namespaces.write().await;
        if namespaces.contains_key(&name) {
            return Err(ClientError::AlreadyExists {
                kind: NAMESPACE_KIND,
                name,
            });
        }
        namespaces.insert(name, namespace.clone());
        Ok(namespace)
    }

    async fn delete_namespace(&self, name: &str) -> Result<(), ClientError> {
        self.namespaces
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound {
                kind: NAMESPACE_KIND,
                name: name.to_owned(),
            })
    }

    async fn create_job(&self, namespace: &str, mut job: Job) -> Result<Job, ClientError> {
        let name = job.metadata.name.clone().unwrap_or_default();
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&key(namespace, &name)) {
            return Err(ClientError::AlreadyExists {
                kind: JOB_KIND,
                name,
            });
        }
        job.metadata.namespace = Some(namespace.to_owned());
        job.metadata.uid = Some(Uuid::new_v4().to_string());
        jobs.insert(key(namespace, &name), job.clone());
        Ok(job)
    }

    async fn get_job(&self, namespace: &str, name: &str) -> Result<Job, ClientError> {
        self.jobs
            .read()
            .await
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                kind: JOB_KIND,
                name: name.to_owned(),
            })
    }

    async fn delete_job(&self, namespace: &str, name: &str) -> Result<(), ClientError> {
        self.jobs
            .write()
            .await
            .remove(&key(namespace, name))
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound {
                kind: JOB_KIND,
                name: name.to_owned(),
            })
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        Ok(self.jobs.read().await.values().cloned().collect())
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClientError> {
        Ok(self.pods.read().await.values().cloned().collect())
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, ClientError> {
        self.pods
            .read()
            .await
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                kind: POD_KIND,
                name: name.to_owned(),
            })
    }

    async fn pod_logs(&self, namespace: &str, name: &str) -> Result<String, ClientError> {
        if !self.pods.read().await.contains_key(&key(namespace, name)) {
            return Err(ClientError::NotFound {
                kind: POD_KIND,
                name: name.to_owned(),
            });
        }
        Ok(self
            .pod_logs
            .read()
            .await
            .get(&key(namespace, name))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_bread(&self, namespace: &str, mut bread: Bread) -> Result<Bread, ClientError> {
        let name = bread.metadata.name.clone().unwrap_or_default();
        let mut breads = self.breads.write().await;
        if breads.contains_key(&key(namespace, &name)) {
            return Err(ClientError::AlreadyExists {
                kind: BREAD_KIND,
                name,
            });
        }
        bread.metadata.namespace = Some(namespace.to_owned());
        bread.metadata.uid = Some(Uuid::new_v4().to_string());
        breads.insert(key(namespace, &name), bread.clone());
        Ok(bread)
    }

    async fn get_bread(&self, namespace: &str, name: &str) -> Result<Bread, ClientError> {
        self.breads
            .read()
            .await
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                kind: BREAD_KIND,
                name: name.to_owned(),
            })
    }

    async fn get_bread_status(&self, namespace: &str, name: &str) -> Result<Bread, ClientError> {
        self.get_bread(namespace, name).await
    }

    async fn delete_bread(&self, namespace: &str, name: &str) -> Result<(), ClientError> {
        self.breads
            .write()
            .await
            .remove(&key(namespace, name))
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound {
                kind: BREAD_KIND,
                name: name.to_owned(),
            })
    }

    async fn list_breads(&self, namespace: &str) -> Result<Vec<Bread>, ClientError> {
        Ok(self
            .breads
            .read()
            .await
            .values()
            .filter(|bread| bread.metadata.namespace.as_deref() == Some(namespace))
            .cloned()
            .collect())
    }
}
