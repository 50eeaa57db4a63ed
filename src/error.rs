//! The error-normalization boundary.
//!
//! Host platforms report acquisition failures in their own vocabulary,
//! usually as a short kind tag ("NotAllowedError", "NotFoundError",
//! "NotReadableError", ...) attached to an otherwise opaque payload.
//! Everything crossing the host boundary passes through [`wrap_errors`]
//! so that callers only ever see [`MediaAccessError`] and never branch
//! on host-specific failure shapes.

use crate::platform::HostError;
use std::future::Future;
use thiserror::Error;

/// A normalized media-access failure.
#[derive(Debug, Clone, Error)]
pub enum MediaAccessError {
    /// The host rejected an operation with a recognizable kind tag.
    ///
    /// The tag vocabulary is host-defined and passed through verbatim;
    /// the message is derived deterministically from the tag.
    #[error("cannot access video stream ({kind})")]
    Access {
        /// Host-reported failure-kind tag.
        kind: String,
    },

    /// The host exposes no stream-acquisition primitive at all, neither
    /// modern nor legacy.
    #[error("no stream acquisition capability available")]
    CapabilityUnavailable,

    /// A host failure that carried no kind tag, propagated unwrapped
    /// with its payload preserved.
    #[error(transparent)]
    Host(HostError),
}

impl MediaAccessError {
    /// Returns the host failure-kind tag, if this error carries one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Access { kind } => Some(kind),
            Self::CapabilityUnavailable | Self::Host(_) => None,
        }
    }

    fn from_host(err: HostError) -> Self {
        let HostError { kind, message } = err;
        match kind {
            Some(kind) => Self::Access { kind },
            None => Self::Host(HostError {
                kind: None,
                message,
            }),
        }
    }
}

/// Runs a host-boundary operation and normalizes its failure.
///
/// On success the result is returned unchanged. A failure carrying a
/// kind tag becomes [`MediaAccessError::Access`]; a failure without one
/// propagates as [`MediaAccessError::Host`] with the original payload.
/// No retries, no recovery: every failure surfaces to the caller.
pub async fn wrap_errors<T, F>(op: F) -> Result<T, MediaAccessError>
where
    F: Future<Output = Result<T, HostError>>,
{
    op.await.map_err(MediaAccessError::from_host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_passes_through() {
        let result = wrap_errors(async { Ok::<_, HostError>(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn tagged_failure_is_normalized() {
        let err = wrap_errors::<(), _>(async {
            Err(HostError::tagged("NotAllowedError", "user dismissed prompt"))
        })
        .await
        .unwrap_err();

        assert_eq!(err.kind(), Some("NotAllowedError"));
        assert!(err.to_string().contains("NotAllowedError"));
    }

    #[tokio::test]
    async fn untagged_failure_propagates_verbatim() {
        let err = wrap_errors::<(), _>(async {
            Err(HostError::untagged("bridge process crashed"))
        })
        .await
        .unwrap_err();

        match err {
            MediaAccessError::Host(inner) => {
                assert_eq!(inner.kind, None);
                assert_eq!(inner.message, "bridge process crashed");
            }
            other => panic!("expected Host passthrough, got {:?}", other),
        }
    }
}
