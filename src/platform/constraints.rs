//! Stream constraint sets.
//!
//! A constraint set describes what stream the host should grant:
//! whether audio is wanted, and either "any video" (used for the
//! permission probe) or a structured request pinning a specific device
//! and resolution bounds.

use crate::config::StreamProfile;
use serde::{Deserialize, Serialize};

/// A full constraint set passed to a stream-acquisition primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConstraints {
    /// Whether an audio track is requested. Always `false` in this
    /// crate's own flows.
    pub audio: bool,
    /// The video portion of the request.
    pub video: VideoConstraints,
}

impl StreamConstraints {
    /// A generic video-only request with no device pinning, used to
    /// trigger the permission prompt.
    pub fn video_only() -> Self {
        Self {
            audio: false,
            video: VideoConstraints::Enabled(true),
        }
    }

    /// A request pinned to one device, with resolution and aspect-ratio
    /// bounds taken from the given profile.
    pub fn for_device(source_id: impl Into<String>, profile: &StreamProfile) -> Self {
        Self {
            audio: profile.audio,
            video: VideoConstraints::Device(DeviceConstraints {
                mandatory: MandatoryConstraints {
                    source_id: source_id.into(),
                    min_width: profile.min_width,
                    max_width: profile.max_width,
                    min_aspect_ratio: profile.min_aspect_ratio,
                },
                optional: Vec::new(),
            }),
        }
    }
}

/// The video part of a constraint set: a bare flag or a structured
/// per-device request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoConstraints {
    /// Request (or decline) any video stream.
    Enabled(bool),
    /// Request a stream from one specific device.
    Device(DeviceConstraints),
}

/// A structured video request targeting one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConstraints {
    /// Constraints the host must satisfy.
    pub mandatory: MandatoryConstraints,
    /// Advisory constraints the host may ignore.
    #[serde(default)]
    pub optional: Vec<Constraint>,
}

/// The mandatory fields of a per-device video request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryConstraints {
    /// Identifier of the device the stream must come from.
    pub source_id: String,
    /// Minimum acceptable frame width in pixels.
    pub min_width: u32,
    /// Maximum acceptable frame width in pixels.
    pub max_width: u32,
    /// Minimum acceptable width/height ratio.
    pub min_aspect_ratio: f64,
}

/// One advisory name/value constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint name, host-defined.
    pub name: String,
    /// Requested value, host-defined.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_only_requests_no_audio() {
        let constraints = StreamConstraints::video_only();
        assert!(!constraints.audio);
        assert_eq!(constraints.video, VideoConstraints::Enabled(true));
    }

    #[test]
    fn for_device_pins_source_and_profile_bounds() {
        let constraints = StreamConstraints::for_device("abc", &StreamProfile::default());

        let VideoConstraints::Device(device) = constraints.video else {
            panic!("expected a structured device request");
        };
        assert_eq!(device.mandatory.source_id, "abc");
        assert_eq!(device.mandatory.min_width, 600);
        assert_eq!(device.mandatory.max_width, 800);
        assert_eq!(device.mandatory.min_aspect_ratio, 1.6);
        assert!(device.optional.is_empty());
        assert!(!constraints.audio);
    }
}
