//! Theme registry.
//!
//! Each theme is a fixed bundle of visual and kinematic parameters: colors,
//! particle count, base size, speed, shape and rotation behavior. Themes are
//! identified by [`ThemeId`] and looked up with [`ThemeId::config`], which is
//! a total match over the enum so adding a theme forces a decision at every
//! call site.

use crate::error::BackdropError;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    /// Drifting cubes in teal on dark navy.
    #[default]
    Cyber,
    /// Orbiting spheres in purple, swirling around the vertical axis.
    Galaxy,
    /// Falling green glyphs, rain-style.
    Matrix,
}

impl ThemeId {
    /// All themes, in display order.
    pub const ALL: [ThemeId; 3] = [ThemeId::Cyber, ThemeId::Galaxy, ThemeId::Matrix];

    /// Lowercase name as used on the string boundary (CLI, titles).
    pub fn name(&self) -> &'static str {
        match self {
            ThemeId::Cyber => "cyber",
            ThemeId::Galaxy => "galaxy",
            ThemeId::Matrix => "matrix",
        }
    }

    /// The static configuration for this theme.
    pub fn config(&self) -> &'static Theme {
        match self {
            ThemeId::Cyber => &CYBER,
            ThemeId::Galaxy => &GALAXY,
            ThemeId::Matrix => &MATRIX,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeId {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyber" => Ok(ThemeId::Cyber),
            "galaxy" => Ok(ThemeId::Galaxy),
            "matrix" => Ok(ThemeId::Matrix),
            other => Err(BackdropError::UnknownTheme(other.to_string())),
        }
    }
}

/// Geometric archetype of a particle. Determines both the spawn distribution
/// and the velocity model (see [`crate::particle::Particle::spawn`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Box geometry, scattered through a cube volume with random drift.
    Cube,
    /// Sphere geometry, spawned on a shell with tangential velocity.
    Sphere,
    /// Flat glyph quad, spawned above the view and falling straight down.
    Glyph,
}

/// Immutable configuration for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Primary particle color (RGB, 0-1). Also the emissive tint.
    pub primary: Vec3,
    /// Secondary particle color (RGB, 0-1).
    pub secondary: Vec3,
    /// Number of particles seeded on activation. Invariant afterwards.
    pub particle_count: u32,
    /// Base particle size before per-particle jitter.
    pub particle_size: f32,
    /// Speed scalar; exact meaning depends on the shape kind.
    pub particle_speed: f32,
    /// Shape archetype for spawned particles.
    pub shape: ShapeKind,
    /// Per-axis angular increment scalar for tumbling.
    pub rotation_speed: f32,
    /// Particle opacity (0-1).
    pub opacity: f32,
}

/// Expand a `0xRRGGBB` hex color into linear-ish RGB components.
const fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

static CYBER: Theme = Theme {
    primary: rgb(0x64ffda),
    secondary: rgb(0x0a192f),
    particle_count: 150,
    particle_size: 0.15,
    particle_speed: 0.05,
    shape: ShapeKind::Cube,
    rotation_speed: 0.01,
    opacity: 0.8,
};

static GALAXY: Theme = Theme {
    primary: rgb(0xbd93f9),
    secondary: rgb(0x282a36),
    particle_count: 200,
    particle_size: 0.1,
    particle_speed: 0.03,
    shape: ShapeKind::Sphere,
    rotation_speed: 0.005,
    opacity: 0.9,
};

static MATRIX: Theme = Theme {
    primary: rgb(0x50fa7b),
    secondary: rgb(0x282a36),
    particle_count: 300,
    particle_size: 0.12,
    particle_speed: 0.08,
    shape: ShapeKind::Glyph,
    rotation_speed: 0.002,
    opacity: 0.7,
};
