/// The types of errors that can occur while talking to the control plane.
///
/// Remote failures are never retried or suppressed; every control-plane
/// error surfaces to the caller with its kind preserved, so polling callers
/// can tell "does not exist" apart from "not there yet".
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The object genuinely does not exist.
    #[error("{kind} {name:?} not found")]
    NotFound { kind: &'static str, name: String },
    /// Create was attempted for a name that already exists.
    #[error("{kind} {name:?} already exists")]
    AlreadyExists { kind: &'static str, name: String },
    /// The bread exists but the reconciler has not written a status yet.
    /// Distinct from [`ClientError::NotFound`]: the caller should poll again.
    #[error("bread {name:?} has no status yet, reconciliation pending")]
    StatusNotReady { name: String },
    /// Logs or pod info were requested for a job that has no correlated pod
    /// yet. Also a "poll again" condition, never conflated with
    /// [`ClientError::NotFound`].
    #[error("no pod has been scheduled for job {job:?} yet")]
    PodNotScheduled { job: String },
    /// Control plane unreachable, unauthorized, or any other transport
    /// failure, surfaced verbatim.
    #[error("kubernetes client error")]
    Client(#[from] kube::Error),
}

impl ClientError {
    /// Map an API error for an operation on a single named object: HTTP 404
    /// becomes [`ClientError::NotFound`] and 409 becomes
    /// [`ClientError::AlreadyExists`]; anything else passes through.
    pub(crate) fn for_object(kind: &'static str, name: &str, err: kube::Error) -> Self {
        match err {
            kube::Error::Api(ref response) if response.code == 404 => Self::NotFound {
                kind,
                name: name.to_owned(),
            },
            kube::Error::Api(ref response) if response.code == 409 => Self::AlreadyExists {
                kind,
                name: name.to_owned(),
            },
            other => Self::Client(other),
        }
    }
}

pub(crate) const NAMESPACE_KIND: &str = "Namespace";
pub(crate) const JOB_KIND: &str = "Job";
pub(crate) const POD_KIND: &str = "Pod";
pub(crate) const BREAD_KIND: &str = "Bread";
