//! Camera discovery.

use super::entity::Camera;
use super::name::camera_name;
use crate::config::StreamProfile;
use crate::error::{wrap_errors, MediaAccessError};
use crate::platform::{
    halt_video_tracks, DeviceKind, HostPlatform, StreamConstraints, StreamSource,
};
use std::sync::Arc;

/// Discovers video input devices on a host platform.
///
/// Construction resolves the host's acquisition capability once; every
/// camera handed out shares that resolved capability. The directory
/// keeps no device registry of its own: each [`cameras`] call
/// re-enumerates from the host.
///
/// [`cameras`]: CameraDirectory::cameras
pub struct CameraDirectory {
    host: Arc<dyn HostPlatform>,
    source: StreamSource,
    profile: StreamProfile,
}

impl std::fmt::Debug for CameraDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraDirectory")
            .field("source", &self.source)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl CameraDirectory {
    /// Creates a directory over the given host with the default stream
    /// profile.
    ///
    /// Fails with [`MediaAccessError::CapabilityUnavailable`] when the
    /// host exposes no acquisition primitive.
    pub fn new(host: Arc<dyn HostPlatform>) -> Result<Self, MediaAccessError> {
        Self::with_profile(host, StreamProfile::default())
    }

    /// Creates a directory with an explicit stream profile.
    pub fn with_profile(
        host: Arc<dyn HostPlatform>,
        profile: StreamProfile,
    ) -> Result<Self, MediaAccessError> {
        let source = StreamSource::detect(host.as_ref())?;
        Ok(Self {
            host,
            source,
            profile,
        })
    }

    /// Confirms (or triggers) media-access permission.
    ///
    /// Requests a throwaway generic video stream, halts its tracks
    /// immediately and discards it. The stream is never stored; the
    /// only purpose is making the host show its permission prompt so
    /// that device labels become visible.
    pub async fn ensure_access(&self) -> Result<(), MediaAccessError> {
        let access = wrap_errors(self.source.request_stream(&StreamConstraints::video_only()))
            .await?;
        halt_video_tracks(access.as_ref());
        tracing::debug!("media access confirmed");
        Ok(())
    }

    /// Lists the host's video input devices as [`Camera`] entities.
    ///
    /// Permission is ensured first; if that fails, enumeration is never
    /// attempted. Devices are returned in host enumeration order, which
    /// is not guaranteed stable across calls or platforms.
    pub async fn cameras(&self) -> Result<Vec<Camera>, MediaAccessError> {
        self.ensure_access().await?;

        let devices = wrap_errors(self.host.enumerate_devices()).await?;
        let cameras: Vec<Camera> = devices
            .into_iter()
            .filter(|d| d.kind == DeviceKind::VideoInput)
            .map(|d| {
                Camera::new(
                    d.device_id,
                    camera_name(&d.label),
                    self.source.clone(),
                    self.profile.clone(),
                )
            })
            .collect();

        tracing::info!(count = cameras.len(), "enumerated video input devices");
        Ok(cameras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DeviceInfo, HostError, MockHost};

    fn two_device_host() -> Arc<MockHost> {
        Arc::new(MockHost::with_devices(vec![
            DeviceInfo::new(DeviceKind::VideoInput, "HD Cam (04f2:b5d6)", "abc"),
            DeviceInfo::new(DeviceKind::AudioInput, "Mic", "xyz"),
        ]))
    }

    #[tokio::test]
    async fn maps_video_inputs_to_cameras() {
        let host = two_device_host();
        let directory = CameraDirectory::new(Arc::clone(&host) as Arc<dyn HostPlatform>).unwrap();

        let cameras = directory.cameras().await.unwrap();
        assert_eq!(cameras.len(), 1);
        assert_eq!(cameras[0].id(), "abc");
        assert_eq!(cameras[0].name(), Some("HD Cam"));
        assert_eq!(host.enumerate_calls(), 1);
    }

    #[tokio::test]
    async fn preserves_host_enumeration_order() {
        let host = Arc::new(MockHost::with_devices(vec![
            DeviceInfo::new(DeviceKind::VideoInput, "Front (aa)", "front"),
            DeviceInfo::new(DeviceKind::AudioOutput, "Speakers", "spk"),
            DeviceInfo::new(DeviceKind::VideoInput, "Rear (bb)", "rear"),
        ]));
        let directory = CameraDirectory::new(host as Arc<dyn HostPlatform>).unwrap();

        let cameras = directory.cameras().await.unwrap();
        let ids: Vec<&str> = cameras.iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["front", "rear"]);
    }

    #[tokio::test]
    async fn ensure_access_discards_probe_stream() {
        let host = two_device_host();
        let directory = CameraDirectory::new(Arc::clone(&host) as Arc<dyn HostPlatform>).unwrap();

        directory.ensure_access().await.unwrap();

        let granted = host.granted_streams();
        assert_eq!(granted.len(), 1);
        assert!(granted[0].tracks().iter().all(|t| t.is_stopped()));
    }

    #[tokio::test]
    async fn denied_permission_skips_enumeration() {
        let host = two_device_host();
        host.fail_next_request(HostError::tagged("PermissionDeniedError", "denied"));
        let directory = CameraDirectory::new(Arc::clone(&host) as Arc<dyn HostPlatform>).unwrap();

        let err = directory.cameras().await.unwrap_err();
        assert_eq!(err.kind(), Some("PermissionDeniedError"));
        assert_eq!(host.enumerate_calls(), 0);
    }

    #[tokio::test]
    async fn untagged_access_failure_passes_through() {
        let host = two_device_host();
        host.fail_next_request(HostError::untagged("ipc channel closed"));
        let directory = CameraDirectory::new(Arc::clone(&host) as Arc<dyn HostPlatform>).unwrap();

        let err = directory.cameras().await.unwrap_err();
        assert!(matches!(err, MediaAccessError::Host(_)));
    }

    #[tokio::test]
    async fn untagged_enumeration_failure_passes_through() {
        let host = two_device_host();
        host.fail_next_enumerate(HostError::untagged("device daemon unreachable"));
        let directory = CameraDirectory::new(Arc::clone(&host) as Arc<dyn HostPlatform>).unwrap();

        let err = directory.cameras().await.unwrap_err();
        match err {
            MediaAccessError::Host(inner) => {
                assert_eq!(inner.message, "device daemon unreachable");
            }
            other => panic!("expected Host passthrough, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn capability_less_host_is_rejected_at_construction() {
        let host = Arc::new(MockHost::new().without_capability());
        let err = CameraDirectory::new(host as Arc<dyn HostPlatform>).unwrap_err();
        assert!(matches!(err, MediaAccessError::CapabilityUnavailable));
    }
}
