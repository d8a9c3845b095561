//! radview: Radiance view parameters for Rust.
//!
//! Build, validate, split and transform the viewpoints that Radiance
//! programs such as `rpict` and `rvu` take, and read or write them as view
//! files.
//!
//! # Quick Start
//!
//! ```no_run
//! use radview::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let mut view = View::new("office")?
//!         .with_position(DVec3::new(2.0, 3.0, 1.2))
//!         .with_direction(DVec3::Y)
//!         .with_up_vector(DVec3::Z);
//!     view.set_fore_clip(Some(0.5));
//!
//!     // Four tiles that can be rendered in parallel.
//!     for tile in view.grid(2, 2)? {
//!         println!("rpict {} {} scene.oct", tile.dimension(Some(512), Some(512))?, tile);
//!     }
//!
//!     io::save(&view, "views", None, true)?;
//!     Ok(())
//! }
//! ```
//!
//! Diagnostics (fisheye size corrections, ignored parameters, unsupported
//! grids) are reported through the [`log`] crate.

pub mod io;

// Re-export core types
pub use radview_core::{
    codec, error, flags, fit_resolution, grid, options, parse_options, plane, resolution,
    transform, view, view_type, OptionValue, Options, ParsedOption, RadianceOption, Result,
    View, ViewDict, ViewError, ViewPlane, ViewType, DEFAULT_SIZE, FISHEYE_SIZE,
    MAX_FISHEYE_SIZE,
};

pub use glam::{DQuat, DVec3};

/// Installs an `env_logger` logger so diagnostics are printed.
///
/// Does nothing if a logger is already set, so applications can install
/// their own instead.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("radview initialized");
}
