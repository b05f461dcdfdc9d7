//!
//! # Namespace manager
//!
//! Creates, finds, and deletes the isolation boundaries tasks run in.
//! A namespace belongs to a user iff its label map is exactly
//! `{"user": <name>}`; ownership filtering happens client-side over the
//! full listing, the conservative baseline until the control plane's
//! exact-match label selection is adopted.
//!
use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::debug;
use tracing::instrument;

use crate::client::{ClusterClient, SharedClusterClient};
use crate::error::ClientError;

const USER_LABEL: &str = "user";

pub struct NamespaceManager<C> {
    client: SharedClusterClient<C>,
}

impl<C: ClusterClient> NamespaceManager<C> {
    pub fn new(client: SharedClusterClient<C>) -> Self {
        Self { client }
    }

    /// Namespaces owned by `user`: label map equal to exactly
    /// `{"user": user}`, never a superset.
    #[instrument(skip(self))]
    pub async fn list_by_owner(&self, user: &str) -> Result<Vec<Namespace>, ClientError> {
        let namespaces = self.client.list_namespaces().await?;
        let owned: Vec<Namespace> = namespaces
            .into_iter()
            .filter(|namespace| owned_by(namespace, user))
            .collect();
        debug!(user, owned = owned.len(), "filtered namespaces by owner");
        Ok(owned)
    }

    /// Namespaces whose name contains `fragment`; an exact name match is
    /// the special case `fragment == name`.
    #[instrument(skip(self))]
    pub async fn find(&self, fragment: &str) -> Result<Vec<Namespace>, ClientError> {
        let namespaces = self.client.list_namespaces().await?;
        Ok(namespaces
            .into_iter()
            .filter(|namespace| {
                namespace
                    .metadata
                    .name
                    .as_deref()
                    .is_some_and(|name| name.contains(fragment))
            })
            .collect())
    }

    /// Create a namespace tagged with its owning user. Duplicate names
    /// conflict.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, user: &str) -> Result<Namespace, ClientError> {
        let namespace = Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_owned()),
                labels: Some(BTreeMap::from([(
                    USER_LABEL.to_owned(),
                    user.to_owned(),
                )])),
                ..Default::default()
            },
            ..Default::default()
        };
        self.client.create_namespace(namespace).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Namespace, ClientError> {
        self.client.get_namespace(name).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<(), ClientError> {
        self.client.delete_namespace(name).await
    }
}

fn owned_by(namespace: &Namespace, user: &str) -> bool {
    match namespace.metadata.labels.as_ref() {
        Some(labels) => labels.len() == 1 && labels.get(USER_LABEL).map(String::as_str) == Some(user),
        None => false,
    }
}
