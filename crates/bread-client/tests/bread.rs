use bread_client::BreadManager;
use bread_client::ClientError;
use bread_client::client::MemoryClient;
use bread_metadata::{BreadPhase, BreadSpec, BreadStatus, BreadTask, FrameworkSpec, ScvQuota};

fn train_spec() -> BreadSpec {
    BreadSpec {
        scv: ScvQuota {
            gpu: 2,
            memory: "8Gi".to_owned(),
            clock: 1500,
            priority: 1,
        },
        framework: FrameworkSpec {
            name: "pytorch".to_owned(),
            version: "1.9".to_owned(),
        },
        task: BreadTask {
            task_type: "train".to_owned(),
            command: vec!["python".to_owned(), "train.py".to_owned()],
        },
    }
}

#[tokio::test]
async fn test_created_bread_round_trips_through_get() {
    let client = MemoryClient::new_shared();
    let manager = BreadManager::new(client);

    manager
        .create("train-42", "bread-1", train_spec())
        .await
        .expect("create");

    let bread = manager.get("train-42", "bread-1").await.expect("get");
    assert_eq!(bread.spec.scv.gpu, 2);
    assert_eq!(bread.spec.scv.memory, "8Gi");
    assert_eq!(bread.spec.framework.name, "pytorch");
    assert_eq!(bread.spec.framework.version, "1.9");
    assert_eq!(bread.spec.task.task_type, "train");

    let err = manager
        .create("train-42", "bread-1", train_spec())
        .await
        .expect_err("duplicate must conflict");
    assert!(matches!(err, ClientError::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_status_before_reconciliation_is_not_ready() {
    let client = MemoryClient::new_shared();
    let manager = BreadManager::new(client.clone());

    manager
        .create("train-42", "bread-1", train_spec())
        .await
        .expect("create");

    // the bread exists, so this must not be NotFound
    let err = manager
        .status("train-42", "bread-1")
        .await
        .expect_err("no status yet");
    assert!(matches!(err, ClientError::StatusNotReady { .. }));

    client
        .set_bread_status(
            "train-42",
            "bread-1",
            BreadStatus {
                phase: BreadPhase::Running,
                message: None,
            },
        )
        .await
        .expect("reconcile");

    let status = manager.status("train-42", "bread-1").await.expect("status");
    assert_eq!(status.phase, BreadPhase::Running);
    assert!(!status.phase.is_terminal());
}

#[tokio::test]
async fn test_status_of_missing_bread_is_not_found() {
    let client = MemoryClient::new_shared();
    let manager = BreadManager::new(client);

    let err = manager
        .status("train-42", "bread-1")
        .await
        .expect_err("does not exist");
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_is_scoped_to_namespace() {
    let client = MemoryClient::new_shared();
    let manager = BreadManager::new(client);

    manager
        .create("train-42", "bread-1", train_spec())
        .await
        .expect("create");
    manager
        .create("train-42", "bread-2", train_spec())
        .await
        .expect("create");
    manager
        .create("train-43", "bread-1", train_spec())
        .await
        .expect("create");

    let breads = manager.list("train-42").await.expect("list");
    assert_eq!(breads.len(), 2);

    let breads = manager.list("empty-ns").await.expect("list");
    assert!(breads.is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let client = MemoryClient::new_shared();
    let manager = BreadManager::new(client);

    manager
        .create("train-42", "bread-1", train_spec())
        .await
        .expect("create");
    manager.delete("train-42", "bread-1").await.expect("delete");

    let err = manager
        .get("train-42", "bread-1")
        .await
        .expect_err("gone");
    assert!(matches!(err, ClientError::NotFound { .. }));
    let err = manager
        .delete("train-42", "bread-1")
        .await
        .expect_err("gone");
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn test_pod_accessors_take_explicit_pod_names() {
    use k8s_openapi::api::core::v1::Pod;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    let client = MemoryClient::new_shared();
    let manager = BreadManager::new(client.clone());

    client
        .insert_pod(Pod {
            metadata: ObjectMeta {
                name: Some("bread-1-pod".to_owned()),
                namespace: Some("train-42".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await;
    client
        .set_pod_logs("train-42", "bread-1-pod", "loss: 0.02\n")
        .await;

    let logs = manager
        .pod_logs("train-42", "bread-1-pod")
        .await
        .expect("logs");
    assert_eq!(logs, "loss: 0.02\n");

    let pod = manager
        .pod_info("train-42", "bread-1-pod")
        .await
        .expect("pod info");
    assert_eq!(pod.metadata.name.as_deref(), Some("bread-1-pod"));

    let err = manager
        .pod_logs("train-42", "unknown-pod")
        .await
        .expect_err("unknown pod");
    assert!(matches!(err, ClientError::NotFound { .. }));
}
