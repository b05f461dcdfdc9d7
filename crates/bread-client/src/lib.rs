//! Client for the Bread task control plane.
//!
//! Turns a logical task (user code plus a resource-quota request, run
//! inside a container) into cluster-native objects and back: namespaces
//! tagged by owning user ([`NamespaceManager`]), run-once Jobs built from
//! task descriptors ([`JobManager`]), identity-based Job-to-pod ownership
//! resolution ([`PodResolver`]) with read-only log/status access on top
//! ([`JobObserver`]), and the declarative `Bread` GPU task resource
//! ([`BreadManager`]).
//!
//! # Example
//!
//! ```no_run
//! use bread_client::{load_and_share, JobManager, JobObserver};
//! use bread_metadata::TaskSpec;
//!
//! # async fn example() -> Result<(), bread_client::ClientError> {
//! let client = load_and_share().await?;
//!
//! let task = TaskSpec::builder()
//!     .name("job-7")
//!     .image("img:1")
//!     .command(vec!["python".to_owned(), "run.py".to_owned()])
//!     .host_path("/data/7")
//!     .build()
//!     .expect("all required fields set");
//!
//! JobManager::new(client.clone()).submit("train-42", &task).await?;
//! let logs = JobObserver::new(client).logs("train-42", "job-7").await?;
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
mod bread;
mod config;
mod error;
mod job;
mod namespace;

pub use bread::BreadManager;
pub use config::{load_and_share, share_from_config};
pub use error::ClientError;
pub use job::{JobManager, JobObserver, PodResolver};
pub use namespace::NamespaceManager;

pub use bread_metadata as metadata;
