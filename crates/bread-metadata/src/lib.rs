//! Object definitions for the Bread task control plane.
//!
//! A task enters the cluster in one of two shapes: an ephemeral [`TaskSpec`]
//! descriptor, translated into a run-once `batch/v1` Job, or a declarative
//! [`Bread`] custom resource whose status is driven by an external
//! reconciler. This crate holds both definitions and their Kubernetes
//! conversions; all remote operations live in `bread-client`.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod bread;
pub mod task;

pub use bread::{Bread, BreadPhase, BreadSpec, BreadStatus, BreadTask, FrameworkSpec, ScvQuota};
pub use task::{TaskSpec, TaskSpecBuilder, TaskSpecBuilderError};
