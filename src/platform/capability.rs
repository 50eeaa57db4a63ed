//! Acquisition-capability detection.
//!
//! Hosts differ in which stream-acquisition primitive they expose: a
//! modern future-returning one, one or more legacy callback-based
//! variants, or none at all. Detection runs once, when a
//! [`StreamSource`] is constructed, and the resolved primitive is then
//! used for every request; callers never re-probe the host per call.

use super::host::{HostError, HostPlatform, LegacyMedia, MediaStream, ModernMedia};
use super::StreamConstraints;
use crate::error::MediaAccessError;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

#[derive(Clone)]
enum Primitive {
    Modern(Arc<dyn ModernMedia>),
    Legacy(Arc<dyn LegacyMedia>),
}

/// A uniform asynchronous stream-acquisition capability, resolved once
/// from whatever primitive the host actually has.
#[derive(Clone)]
pub struct StreamSource {
    primitive: Primitive,
}

impl StreamSource {
    /// Probes the host for an acquisition primitive.
    ///
    /// The modern primitive is preferred; otherwise the first legacy
    /// variant in the host's priority order is used. A host with
    /// neither yields [`MediaAccessError::CapabilityUnavailable`].
    pub fn detect(host: &dyn HostPlatform) -> Result<Self, MediaAccessError> {
        if let Some(modern) = host.modern() {
            tracing::debug!("using modern stream-acquisition primitive");
            return Ok(Self {
                primitive: Primitive::Modern(modern),
            });
        }

        if let Some(legacy) = host.legacy().into_iter().next() {
            tracing::debug!("falling back to legacy stream-acquisition primitive");
            return Ok(Self {
                primitive: Primitive::Legacy(legacy),
            });
        }

        Err(MediaAccessError::CapabilityUnavailable)
    }

    /// Requests a stream matching the given constraints.
    ///
    /// Suspends until the host settles the request; a pending
    /// permission prompt can take unbounded real time and cannot be
    /// cancelled from this layer.
    pub async fn request_stream(
        &self,
        constraints: &StreamConstraints,
    ) -> Result<Arc<dyn MediaStream>, HostError> {
        match &self.primitive {
            Primitive::Modern(api) => api.request_stream(constraints).await,
            Primitive::Legacy(api) => legacy_request(api.as_ref(), constraints).await,
        }
    }
}

impl std::fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let primitive = match self.primitive {
            Primitive::Modern(_) => "modern",
            Primitive::Legacy(_) => "legacy",
        };
        f.debug_struct("StreamSource")
            .field("primitive", &primitive)
            .finish()
    }
}

/// Adapts the legacy success/failure callbacks into one settled
/// asynchronous result. Only the first callback to fire wins.
async fn legacy_request(
    api: &dyn LegacyMedia,
    constraints: &StreamConstraints,
) -> Result<Arc<dyn MediaStream>, HostError> {
    type Settled = Result<Arc<dyn MediaStream>, HostError>;

    let (tx, rx) = oneshot::channel::<Settled>();
    let tx = Arc::new(Mutex::new(Some(tx)));

    let settle = |outcome: Settled, slot: &Arc<Mutex<Option<oneshot::Sender<Settled>>>>| {
        if let Ok(mut guard) = slot.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(outcome);
            }
        }
    };

    let tx_ok = Arc::clone(&tx);
    let tx_err = Arc::clone(&tx);
    api.request_stream(
        constraints,
        Box::new(move |stream| settle(Ok(stream), &tx_ok)),
        Box::new(move |err| settle(Err(err), &tx_err)),
    );

    match rx.await {
        Ok(outcome) => outcome,
        // Host dropped both callbacks without invoking either.
        Err(_) => Err(HostError::untagged(
            "legacy primitive never settled the request",
        )),
    }
}
