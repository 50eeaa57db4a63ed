//! The host-platform boundary.
//!
//! This module defines the traits through which the host's media
//! capabilities are consumed: device enumeration, modern and legacy
//! stream acquisition, and the stream/track handles the host grants.
//! The rest of the crate never touches a host API directly; it only
//! sees these contracts.

mod capability;
mod constraints;
mod host;
mod mock;

pub use capability::StreamSource;
pub use constraints::{
    Constraint, DeviceConstraints, MandatoryConstraints, StreamConstraints, VideoConstraints,
};
pub use host::{
    halt_video_tracks, DeviceInfo, DeviceKind, HostError, HostPlatform, LegacyMedia, MediaStream,
    MediaTrack, ModernMedia,
};
pub use mock::{MockHost, MockStream, MockTrack};
