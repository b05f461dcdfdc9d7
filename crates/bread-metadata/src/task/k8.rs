//!
//! # Job translation
//!
//! Deterministic mapping from a [`TaskSpec`] to a `batch/v1` Job. The
//! translation is side-effect free; every call with the same descriptor
//! yields a structurally identical Job.
//!
use std::collections::BTreeMap;

use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{
    Container, EnvVar, HostPathVolumeSource, PodSpec, PodTemplateSpec, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use super::TaskSpec;

/// Fixed path the task volume is mounted at inside the container.
pub const TASK_MOUNT_PATH: &str = "/root";

/// Environment setting keeping the task's output unbuffered, so logs are
/// observable while the task runs. Any non-empty value enables it.
pub const UNBUFFERED_ENV: (&str, &str) = ("PYTHONUNBUFFERED", "0");

/// Suffix appended to the task name to form its volume name.
pub const VOLUME_SUFFIX: &str = "-volume";

const RESTART_POLICY_NEVER: &str = "Never";
const PARALLELISM: i32 = 1;
const BACKOFF_LIMIT: i32 = 0;

impl TaskSpec {
    /// Build the run-once Job for this task.
    ///
    /// Exactly one container and one host-path volume. Restarts are
    /// disabled entirely (restart-never, backoff limit 0): the wrapped
    /// tasks are not assumed idempotent, so every failure must be terminal
    /// and visible rather than silently retried.
    pub fn to_job(&self) -> Job {
        let volume_name = self.volume_name();

        let container = Container {
            name: self.name.clone(),
            image: Some(self.image.clone()),
            command: Some(self.command.clone()),
            env: Some(vec![EnvVar {
                name: UNBUFFERED_ENV.0.to_owned(),
                value: Some(UNBUFFERED_ENV.1.to_owned()),
                ..Default::default()
            }]),
            volume_mounts: Some(vec![VolumeMount {
                name: volume_name.clone(),
                mount_path: TASK_MOUNT_PATH.to_owned(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let volume = Volume {
            name: volume_name,
            host_path: Some(HostPathVolumeSource {
                path: self.host_path.clone(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let template = PodTemplateSpec {
            metadata: Some(ObjectMeta {
                name: Some(self.name.clone()),
                labels: self
                    .owner
                    .as_ref()
                    .map(|user| BTreeMap::from([("user".to_owned(), user.clone())])),
                ..Default::default()
            }),
            spec: Some(PodSpec {
                restart_policy: Some(RESTART_POLICY_NEVER.to_owned()),
                containers: vec![container],
                volumes: Some(vec![volume]),
                ..Default::default()
            }),
        };

        Job {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                ..Default::default()
            },
            spec: Some(JobSpec {
                template,
                parallelism: Some(PARALLELISM),
                backoff_limit: Some(BACKOFF_LIMIT),
                ..Default::default()
            }),
            status: None,
        }
    }
}
