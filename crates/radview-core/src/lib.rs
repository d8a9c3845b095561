//! Core types for radview.
//!
//! This crate models the view parameters of the Radiance lighting simulation
//! tools:
//! - [`View`] with validated fields and derived queries
//! - Conversion to and from Radiance parameter strings and view files
//! - Resolution fitting, grid splitting for tiled rendering, and rigid
//!   transforms
//! - Configuration options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod codec;
pub mod error;
pub mod flags;
pub mod grid;
pub mod options;
pub mod plane;
pub mod resolution;
pub mod transform;
pub mod view;
pub mod view_type;

pub use error::{Result, ViewError};
pub use flags::{parse_options, OptionValue, ParsedOption, RadianceOption};
pub use options::Options;
pub use plane::ViewPlane;
pub use resolution::fit_resolution;
pub use view::{View, ViewDict, DEFAULT_SIZE, FISHEYE_SIZE, MAX_FISHEYE_SIZE};
pub use view_type::ViewType;

// Re-export glam types for convenience
pub use glam::{DQuat, DVec3};
