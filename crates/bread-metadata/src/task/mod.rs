//!
//! # Task descriptor
//!
//! Ephemeral description of a containerized task: user code in an image,
//! a command to run it, and a host path holding the code layout. Exists
//! only to parametrize the Job translation; never persisted.
//!
use derive_builder::Builder;
use serde::Deserialize;
use serde::Serialize;

mod k8;

pub use k8::{TASK_MOUNT_PATH, UNBUFFERED_ENV, VOLUME_SUFFIX};

/// Descriptor for a run-once containerized task.
///
/// # Example
///
/// ```
/// use bread_metadata::TaskSpec;
///
/// let task = TaskSpec::builder()
///     .name("job-7")
///     .image("img:1")
///     .command(vec!["python".to_owned(), "run.py".to_owned()])
///     .host_path("/data/7")
///     .build()
///     .expect("all required fields set");
/// assert_eq!(task.volume_name(), "job-7-volume");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Name of the work unit; also used as the container name.
    pub name: String,
    /// Container image reference. Reachability is not validated here; an
    /// unknown image surfaces from the cluster at scheduling time.
    pub image: String,
    /// Command vector executed inside the container.
    pub command: Vec<String>,
    /// Host path bound into the container at the fixed mount path. The
    /// caller-side code layout contract is assumed, not checked.
    pub host_path: String,
    /// Owning user stamped as the `user` label on the pod template.
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl TaskSpec {
    pub fn builder() -> TaskSpecBuilder {
        TaskSpecBuilder::default()
    }

    /// Name of the single volume backing the task, derived from the task name.
    pub fn volume_name(&self) -> String {
        format!("{}{}", self.name, VOLUME_SUFFIX)
    }
}
