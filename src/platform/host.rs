//! Host media-capability contracts.
//!
//! The host platform is modeled as a set of traits rather than a
//! concrete backend, allowing both real host bindings and mock
//! implementations for testing. Failures are a tagged variant: an
//! optional kind tag plus a message, never an arbitrary object whose
//! fields get inspected at runtime.

use super::StreamConstraints;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// A failure reported by the host platform.
///
/// Hosts attach a short symbolic `kind` tag to failures they can
/// categorize (permission denied, no device, device busy, constraints
/// unsatisfiable). Failures without a tag keep only their payload.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HostError {
    /// Host-defined failure category, if the host provided one.
    pub kind: Option<String>,
    /// Host-provided failure payload.
    pub message: String,
}

impl HostError {
    /// Creates a failure carrying a kind tag.
    pub fn tagged(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            message: message.into(),
        }
    }

    /// Creates a failure without a kind tag.
    pub fn untagged(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }
}

/// Kind of an enumerated input/output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A video capture device (camera).
    VideoInput,
    /// An audio capture device (microphone).
    AudioInput,
    /// An audio playback device (speaker).
    AudioOutput,
}

/// One entry from the host's device enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device category as reported by the host.
    pub kind: DeviceKind,
    /// Raw device label. Empty until media access has been granted at
    /// least once in the session.
    pub label: String,
    /// Opaque, stable device identifier.
    pub device_id: String,
}

impl DeviceInfo {
    /// Creates a device entry.
    pub fn new(kind: DeviceKind, label: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            device_id: device_id.into(),
        }
    }
}

/// One media substream within a granted stream.
///
/// A track holds underlying hardware; it must be stopped explicitly to
/// release the device.
pub trait MediaTrack: Send + Sync {
    /// Halts this track and releases its resources. Idempotent.
    fn stop(&self);
}

/// A capture stream granted by the host.
pub trait MediaStream: Send + Sync {
    /// Returns the video tracks carried by this stream.
    fn video_tracks(&self) -> Vec<Arc<dyn MediaTrack>>;
}

impl std::fmt::Debug for dyn MediaStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MediaStream")
    }
}

/// Stops every video track of a stream.
///
/// Track halting is best-effort and never fails; the host releases the
/// hardware as each track stops.
pub fn halt_video_tracks(stream: &dyn MediaStream) {
    for track in stream.video_tracks() {
        track.stop();
    }
}

/// The modern, future-returning stream-acquisition primitive.
#[async_trait]
pub trait ModernMedia: Send + Sync {
    /// Requests a stream matching the given constraints.
    ///
    /// May suspend indefinitely while the host prompts the user for
    /// permission; resolution or rejection is entirely host-driven.
    async fn request_stream(
        &self,
        constraints: &StreamConstraints,
    ) -> Result<Arc<dyn MediaStream>, HostError>;
}

/// The legacy, callback-based stream-acquisition primitive.
///
/// Exactly one of the two callbacks is invoked once the host settles
/// the request.
pub trait LegacyMedia: Send + Sync {
    /// Requests a stream matching the given constraints, reporting the
    /// outcome through `on_success` or `on_failure`.
    fn request_stream(
        &self,
        constraints: &StreamConstraints,
        on_success: Box<dyn FnOnce(Arc<dyn MediaStream>) + Send>,
        on_failure: Box<dyn FnOnce(HostError) + Send>,
    );
}

/// The host platform's media capabilities.
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Lists available input/output devices.
    ///
    /// Device labels are withheld (empty) until media access has been
    /// granted at least once in the session.
    async fn enumerate_devices(&self) -> Result<Vec<DeviceInfo>, HostError>;

    /// Returns the modern acquisition primitive, if the host has one.
    fn modern(&self) -> Option<Arc<dyn ModernMedia>>;

    /// Returns the available legacy acquisition primitives in fixed
    /// priority order (unprefixed variant first, then vendor-prefixed
    /// ones).
    fn legacy(&self) -> Vec<Arc<dyn LegacyMedia>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_display_uses_message() {
        let err = HostError::tagged("NotFoundError", "no device matches");
        assert_eq!(err.to_string(), "no device matches");
        assert_eq!(err.kind.as_deref(), Some("NotFoundError"));
    }

    #[test]
    fn device_kind_uses_host_vocabulary() {
        let info: DeviceInfo = toml::from_str(
            "kind = \"videoinput\"\nlabel = \"HD Cam\"\ndevice_id = \"abc\"",
        )
        .unwrap();
        assert_eq!(info.kind, DeviceKind::VideoInput);
    }
}
