use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use bread_client::ClientError;
use bread_client::NamespaceManager;
use bread_client::client::{ClusterClient, MemoryClient};

fn labelled_namespace(name: &str, labels: &[(&str, &str)]) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            labels: Some(
                labels
                    .iter()
                    .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                    .collect::<BTreeMap<String, String>>(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn names(namespaces: &[Namespace]) -> Vec<&str> {
    let mut names: Vec<&str> = namespaces
        .iter()
        .filter_map(|ns| ns.metadata.name.as_deref())
        .collect();
    names.sort_unstable();
    names
}

#[tokio::test]
async fn test_owner_filter_is_exact_label_match() {
    let client = MemoryClient::new_shared();
    let manager = NamespaceManager::new(client.clone());

    manager.create("train-42", "alice").await.expect("create");
    // superset of the owner label must not count as owned
    client
        .create_namespace(labelled_namespace(
            "train-43",
            &[("user", "alice"), ("env", "prod")],
        ))
        .await
        .expect("create superset");
    client
        .create_namespace(labelled_namespace("train-44", &[("user", "alicesmith")]))
        .await
        .expect("create other user");
    client
        .create_namespace(labelled_namespace("bare", &[]))
        .await
        .expect("create unlabelled");

    let owned = manager.list_by_owner("alice").await.expect("list");
    assert_eq!(names(&owned), vec!["train-42"]);

    let owned = manager.list_by_owner("bob").await.expect("list");
    assert!(owned.is_empty());
}

#[tokio::test]
async fn test_find_matches_name_substring() {
    let client = MemoryClient::new_shared();
    let manager = NamespaceManager::new(client);

    manager.create("train-1", "alice").await.expect("create");
    manager.create("train-42", "alice").await.expect("create");
    manager.create("dev", "bob").await.expect("create");

    let found = manager.find("train").await.expect("find");
    assert_eq!(names(&found), vec!["train-1", "train-42"]);

    // exact name is the special case fragment == name
    let found = manager.find("train-42").await.expect("find");
    assert_eq!(names(&found), vec!["train-42"]);

    let found = manager.find("missing").await.expect("find");
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_duplicate_create_conflicts() {
    let client = MemoryClient::new_shared();
    let manager = NamespaceManager::new(client);

    manager.create("train-42", "alice").await.expect("create");
    let err = manager
        .create("train-42", "bob")
        .await
        .expect_err("duplicate must conflict");
    assert!(matches!(err, ClientError::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let client = MemoryClient::new_shared();
    let manager = NamespaceManager::new(client);

    manager.create("train-42", "alice").await.expect("create");
    manager.get("train-42").await.expect("get");
    manager.delete("train-42").await.expect("delete");

    let err = manager.get("train-42").await.expect_err("gone");
    assert!(matches!(err, ClientError::NotFound { .. }));
    let err = manager.delete("train-42").await.expect_err("gone");
    assert!(matches!(err, ClientError::NotFound { .. }));
}
