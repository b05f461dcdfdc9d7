//!
//! # Bread
//!
//! Declarative GPU task resource (`core.run-linux.com/v1alpha1`). A Bread
//! describes a GPU-aware task request: the device quota, the framework
//! identity, and the task itself. The spec is written by clients; the
//! status is written exclusively by the out-of-cluster reconciler and may
//! be absent until reconciliation has run.
//!
use kube::CustomResource;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

/// API group of the Bread resource.
pub const GROUP: &str = "core.run-linux.com";

/// API version of the Bread resource.
pub const VERSION: &str = "v1alpha1";

/// Spec of the Bread GPU task resource.
#[derive(CustomResource, Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "core.run-linux.com",
    version = "v1alpha1",
    kind = "Bread",
    plural = "breads",
    namespaced,
    status = "BreadStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct BreadSpec {
    /// Requested device quota.
    pub scv: ScvQuota,
    /// Framework the task runs on.
    pub framework: FrameworkSpec,
    /// The task itself.
    pub task: BreadTask,
}

/// GPU quota requested for a task: device count, memory, clock and
/// scheduling priority.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScvQuota {
    pub gpu: u32,
    pub memory: String,
    pub clock: u32,
    pub priority: i32,
}

/// Framework identity, e.g. `pytorch` `1.9`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSpec {
    pub name: String,
    pub version: String,
}

/// Task identity: its type and the command vector to execute.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BreadTask {
    #[serde(rename = "type")]
    pub task_type: String,
    pub command: Vec<String>,
}

/// Status written by the external reconciler. Absent until the first
/// reconciliation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreadStatus {
    pub phase: BreadPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Observed execution state of a Bread. Advanced exclusively by the
/// reconciler; this crate only reads it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BreadPhase {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl BreadPhase {
    /// Whether the task has reached a final outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
