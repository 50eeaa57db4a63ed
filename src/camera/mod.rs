//! Camera discovery and stream lifecycle.
//!
//! This module holds the user-facing surface: the [`CameraDirectory`]
//! that negotiates permission and enumerates devices, the [`Camera`]
//! entity owning one device's stream lifecycle, and the label
//! normalizer that turns raw host labels into display names.

mod directory;
mod entity;
mod name;

pub use directory::CameraDirectory;
pub use entity::Camera;
pub use name::camera_name;
