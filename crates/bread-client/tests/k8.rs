//! Round trips against a live cluster. These require a reachable
//! kubeconfig (and, for the bread test, the Bread CRD installed), so they
//! are ignored by default:
//!
//! ```text
//! cargo test -p bread-client --test k8 -- --ignored
//! ```

use bread_client::BreadManager;
use bread_client::NamespaceManager;
use bread_client::load_and_share;
use bread_metadata::{BreadSpec, BreadTask, FrameworkSpec, ScvQuota};

const TEST_NS: &str = "bread-client-it";

#[tokio::test]
#[ignore]
async fn test_namespace_create_and_delete() {
    let client = load_and_share().await.expect("cluster not reachable");
    let manager = NamespaceManager::new(client);

    manager
        .create(TEST_NS, "bread-it")
        .await
        .expect("create namespace");

    let owned = manager.list_by_owner("bread-it").await.expect("list");
    assert!(
        owned
            .iter()
            .any(|ns| ns.metadata.name.as_deref() == Some(TEST_NS))
    );

    manager.delete(TEST_NS).await.expect("delete namespace");
}

#[tokio::test]
#[ignore]
async fn test_bread_create_and_delete() {
    let client = load_and_share().await.expect("cluster not reachable");
    let manager = BreadManager::new(client);

    let spec = BreadSpec {
        scv: ScvQuota {
            gpu: 1,
            memory: "1Gi".to_owned(),
            clock: 1000,
            priority: 0,
        },
        framework: FrameworkSpec {
            name: "pytorch".to_owned(),
            version: "1.9".to_owned(),
        },
        task: BreadTask {
            task_type: "train".to_owned(),
            command: vec!["true".to_owned()],
        },
    };

    manager
        .create("default", "bread-it", spec)
        .await
        .expect("create bread");
    let bread = manager.get("default", "bread-it").await.expect("get bread");
    assert_eq!(bread.spec.scv.gpu, 1);

    manager
        .delete("default", "bread-it")
        .await
        .expect("delete bread");
}
