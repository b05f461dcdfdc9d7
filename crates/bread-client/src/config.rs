//!
//! # Client bootstrap
//!
use std::sync::Arc;

use kube::Client;
use kube::Config;
use tracing::debug;

use crate::client::{K8ClusterClient, SharedClusterClient};
use crate::error::ClientError;

/// Load the Kubernetes configuration (kubeconfig, or the in-cluster
/// service account when running inside a pod) and return a shared client.
pub async fn load_and_share() -> Result<SharedClusterClient<K8ClusterClient>, ClientError> {
    let client = Client::try_default().await?;
    debug!(default_namespace = %client.default_namespace(), "loaded kubernetes client");
    Ok(Arc::new(K8ClusterClient::new(client)))
}

/// Build a shared client from an explicit configuration.
pub fn share_from_config(config: Config) -> Result<SharedClusterClient<K8ClusterClient>, ClientError> {
    let client = Client::try_from(config)?;
    Ok(Arc::new(K8ClusterClient::new(client)))
}
