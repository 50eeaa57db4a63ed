//! Camera Access Library
//!
//! A capability-abstraction layer over a host platform's camera API.
//! Discovers video input devices, negotiates user permission, opens and
//! closes capture streams under device-specific constraints, and
//! normalizes heterogeneous host failures into a single typed error.
//!
//! # Architecture
//!
//! The system follows an explicit flow:
//!
//! ```text
//! CameraDirectory ── ensure_access ──► StreamSource ──► host primitive
//!        │                                  ▲
//!        ├── enumerate ► filter ► Camera ───┘ (start / stop)
//!        │
//!   error normalization (every host-boundary call)
//! ```
//!
//! # Design Principles
//!
//! - **One error taxonomy**: every host failure crossing the boundary
//!   is normalized; callers never branch on host-specific shapes
//! - **Capability resolved once**: modern vs. legacy acquisition is
//!   detected at construction, not per call
//! - **No hidden state**: no global registry, no retries, no background
//!   work; each entity owns exactly its stream handle
//! - **Host-agnostic**: the host is a set of traits; mock hosts run the
//!   full flow without hardware
//!
//! # Example
//!
//! ```no_run
//! use camera_access::{CameraDirectory, DeviceInfo, DeviceKind, MockHost};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), camera_access::MediaAccessError> {
//! let host = Arc::new(MockHost::with_devices(vec![DeviceInfo::new(
//!     DeviceKind::VideoInput,
//!     "HD Cam (04f2:b5d6)",
//!     "abc",
//! )]));
//!
//! let directory = CameraDirectory::new(host)?;
//! for camera in directory.cameras().await? {
//!     println!("{}: {}", camera.id(), camera.name().unwrap_or("unnamed"));
//!
//!     let _stream = camera.start().await?;
//!     camera.stop().await;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod camera;
pub mod config;
pub mod error;
pub mod platform;

// Re-export commonly used types at crate root
pub use camera::{camera_name, Camera, CameraDirectory};
pub use config::{ConfigError, FileConfig, StreamProfile};
pub use error::{wrap_errors, MediaAccessError};
pub use platform::{
    DeviceInfo, DeviceKind, HostError, HostPlatform, LegacyMedia, MediaStream, MediaTrack,
    MockHost, MockStream, MockTrack, ModernMedia, StreamConstraints, StreamSource,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
