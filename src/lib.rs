//! # backdrop - themed 3D particle backdrops
//!
//! An animated particle background for desktop windows, switchable between
//! three built-in themes and reacting to pointer position.
//!
//! ## Quick Start
//!
//! ```no_run
//! use backdrop::{Backdrop, ThemeId};
//!
//! fn main() -> Result<(), backdrop::BackdropError> {
//!     Backdrop::new()
//!         .with_theme(ThemeId::Cyber)
//!         .run()
//! }
//! ```
//!
//! ## Themes
//!
//! | Theme | Motion | Shape |
//! |----------|---------------------------------------------|--------|
//! | `cyber` | free drift inside a wrapping box | cube |
//! | `galaxy` | orbit around the y axis, bobbing vertically | sphere |
//! | `matrix` | straight fall, recycling at the top | glyph |
//!
//! Press `1`, `2` or `3` in the running window to switch themes; switching
//! reseeds the particle set from the new theme's configuration. The camera
//! eases toward the pointer and always looks back at the origin.
//!
//! ## Architecture
//!
//! - [`theme`]: static per-theme configuration ([`ThemeId`], [`Theme`]).
//! - [`particle`]: the per-particle state record and its spawn factory.
//! - [`system`]: the live collection, advanced once per frame under the
//!   active theme's motion rule.
//! - [`backdrop`]: the window/frame driver tying input, camera and GPU
//!   together.
//!
//! The simulation is entirely CPU-side and single-threaded; the GPU only
//! ever sees a flattened instance buffer.

pub mod backdrop;
pub mod camera;
pub mod error;
mod gpu;
pub mod input;
pub mod particle;
pub mod spawn;
pub mod system;
pub mod theme;
pub mod time;

pub use backdrop::Backdrop;
pub use error::{BackdropError, GpuError};
pub use glam::{Vec2, Vec3};
pub use particle::{Material, Particle};
pub use spawn::SpawnContext;
pub use system::ParticleSystem;
pub use theme::{ShapeKind, Theme, ThemeId};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::camera::Rig;
    pub use crate::error::BackdropError;
    pub use crate::particle::{Material, Particle};
    pub use crate::spawn::SpawnContext;
    pub use crate::system::ParticleSystem;
    pub use crate::theme::{ShapeKind, Theme, ThemeId};
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3};
}
