//! The camera entity and its stream lifecycle.

use crate::config::StreamProfile;
use crate::error::{wrap_errors, MediaAccessError};
use crate::platform::{halt_video_tracks, MediaStream, StreamConstraints, StreamSource};
use std::sync::Arc;
use tokio::sync::Mutex;

/// One identified video input device.
///
/// A camera is either idle (no stream held) or active (stream held).
/// It starts idle; [`start`](Camera::start) acquires and stores a
/// stream, [`stop`](Camera::stop) halts every track and clears the
/// handle. The stream slot sits behind a mutex so that concurrent
/// `start`/`stop` calls on one entity serialize instead of racing;
/// entities share nothing with each other.
pub struct Camera {
    id: String,
    name: Option<String>,
    source: StreamSource,
    profile: StreamProfile,
    stream: Mutex<Option<Arc<dyn MediaStream>>>,
}

impl Camera {
    /// Creates a camera for a known device id and display name.
    ///
    /// Normally done by [`CameraDirectory::cameras`], but callers that
    /// already know a device id may construct one directly.
    ///
    /// [`CameraDirectory::cameras`]: crate::CameraDirectory::cameras
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        source: StreamSource,
        profile: StreamProfile,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            source,
            profile,
            stream: Mutex::new(None),
        }
    }

    /// The host-provided device identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The normalized display name, if the label yielded one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a stream is currently held.
    pub async fn is_active(&self) -> bool {
        self.stream.lock().await.is_some()
    }

    /// Acquires a stream from this device and stores it.
    ///
    /// Negotiates a constraint set pinning the stream to this device
    /// with the profile's resolution bounds. If a stream is already
    /// held, its tracks are halted before the new acquisition so the
    /// hardware is not left running behind a replaced handle. On
    /// failure nothing is stored and the camera stays idle.
    pub async fn start(&self) -> Result<Arc<dyn MediaStream>, MediaAccessError> {
        let constraints = StreamConstraints::for_device(&self.id, &self.profile);

        let mut slot = self.stream.lock().await;
        if let Some(previous) = slot.take() {
            tracing::debug!(camera = %self.id, "halting previous stream before restart");
            halt_video_tracks(previous.as_ref());
        }

        let stream = wrap_errors(self.source.request_stream(&constraints)).await?;
        tracing::info!(camera = %self.id, "stream started");
        *slot = Some(Arc::clone(&stream));
        Ok(stream)
    }

    /// Halts every video track and clears the stream handle.
    ///
    /// A no-op when idle; never fails.
    pub async fn stop(&self) {
        let mut slot = self.stream.lock().await;
        if let Some(stream) = slot.take() {
            halt_video_tracks(stream.as_ref());
            tracing::info!(camera = %self.id, "stream stopped");
        }
    }
}

impl std::fmt::Debug for Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Camera")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HostError, MockHost};

    fn camera_for(host: &MockHost, id: &str) -> Camera {
        let source = StreamSource::detect(host).expect("mock host has a primitive");
        Camera::new(id, Some("Test Cam".into()), source, StreamProfile::default())
    }

    #[tokio::test]
    async fn stop_on_fresh_camera_is_a_noop() {
        let host = MockHost::new();
        let camera = camera_for(&host, "abc");

        assert!(!camera.is_active().await);
        camera.stop().await;
        assert!(!camera.is_active().await);
        assert!(host.granted_streams().is_empty());
    }

    #[tokio::test]
    async fn start_stores_stream_and_stop_halts_tracks() {
        let host = MockHost::new();
        let camera = camera_for(&host, "abc");

        camera.start().await.unwrap();
        assert!(camera.is_active().await);

        camera.stop().await;
        assert!(!camera.is_active().await);

        let granted = host.granted_streams();
        assert_eq!(granted.len(), 1);
        assert!(granted[0].tracks().iter().all(|t| t.is_stopped()));

        // Repeated stop is again a no-op.
        camera.stop().await;
        assert!(!camera.is_active().await);
    }

    #[tokio::test]
    async fn restart_halts_previous_stream_first() {
        let host = MockHost::new();
        let camera = camera_for(&host, "abc");

        camera.start().await.unwrap();
        camera.start().await.unwrap();

        let granted = host.granted_streams();
        assert_eq!(granted.len(), 2);
        assert!(granted[0].tracks().iter().all(|t| t.is_stopped()));
        assert!(granted[1].tracks().iter().all(|t| !t.is_stopped()));
        assert!(camera.is_active().await);
    }

    #[tokio::test]
    async fn tagged_denial_surfaces_as_access_error() {
        let host = MockHost::new();
        let camera = camera_for(&host, "abc");
        host.fail_next_request(HostError::tagged("NotAllowedError", "user denied"));

        let err = camera.start().await.unwrap_err();
        assert_eq!(err.kind(), Some("NotAllowedError"));
        assert!(err.to_string().contains("NotAllowedError"));
        assert!(!camera.is_active().await);
    }

    #[tokio::test]
    async fn untagged_failure_propagates_unwrapped() {
        let host = MockHost::new();
        let camera = camera_for(&host, "abc");
        host.fail_next_request(HostError::untagged("backend exploded"));

        let err = camera.start().await.unwrap_err();
        match err {
            MediaAccessError::Host(inner) => assert_eq!(inner.message, "backend exploded"),
            other => panic!("expected Host passthrough, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn start_negotiates_device_constraints() {
        // Legacy hosts receive the same constraint shape as modern ones.
        let host = MockHost::new().legacy_only();
        let camera = camera_for(&host, "abc");

        camera.start().await.unwrap();
        assert!(camera.is_active().await);
        assert_eq!(host.granted_streams().len(), 1);
    }
}
