//! The per-particle state record and its spawn factory.
//!
//! A particle is owned by exactly one [`crate::system::ParticleSystem`] and
//! lives until that system is discarded on theme switch. The only mid-life
//! "respawns" are coordinate wraps, which mutate in place.

use crate::spawn::SpawnContext;
use crate::theme::{ShapeKind, Theme};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Material parameters handed to the renderer at creation time. The
/// simulation never reads these back; they ride along with the particle so
/// the instance buffer can be rebuilt from simulation state alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color: the theme's primary with probability 0.5, else secondary.
    pub color: Vec3,
    /// Self-illumination tint, always the theme's primary.
    pub emissive: Vec3,
    /// Emissive contribution factor.
    pub emissive_intensity: f32,
    /// Alpha, from the theme.
    pub opacity: f32,
    /// Specular exponent, fixed medium value.
    pub shininess: f32,
}

/// One live particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// Semantics depend on the theme: linear drift (cube), orbital tangent
    /// (sphere) or fall rate (glyph).
    pub velocity: Vec3,
    /// Current Euler angles.
    pub rotation: Vec3,
    /// Per-axis angular increment, fixed at spawn.
    pub rotation_speed: Vec3,
    /// Spawn-time y, the anchor for the galaxy theme's vertical oscillation.
    pub original_y: f32,
    /// Edge length / radius after per-particle jitter.
    pub size: f32,
    /// Renderer creation parameters.
    pub material: Material,
}

impl Particle {
    /// Spawn one fully-initialized particle for `theme`.
    ///
    /// Spawn distribution and velocity model follow the theme's shape kind:
    /// cubes scatter through a box with random drift, spheres sit on a shell
    /// with a small tangential velocity, glyphs start above the view and
    /// fall straight down.
    pub fn spawn(theme: &Theme, ctx: &mut SpawnContext) -> Self {
        let size = theme.particle_size * (0.5 + ctx.random() * 0.5);

        let (position, velocity) = match theme.shape {
            ShapeKind::Glyph => {
                let position = Vec3::new(
                    ctx.spread(100.0),
                    ctx.range(0.0, 100.0),
                    ctx.spread(50.0),
                );
                (position, Vec3::new(0.0, -theme.particle_speed, 0.0))
            }
            ShapeKind::Sphere => {
                let phi = ctx.random() * TAU;
                let theta = ctx.random() * PI;
                let radius = 20.0 + ctx.random() * 30.0;

                let position = Vec3::new(
                    radius * theta.sin() * phi.cos(),
                    radius * theta.sin() * phi.sin(),
                    radius * theta.cos(),
                );
                let velocity = Vec3::new(
                    phi.cos() * theme.particle_speed * 0.05,
                    phi.sin() * theme.particle_speed * 0.05,
                    theta.sin() * theme.particle_speed * 0.05,
                );
                (position, velocity)
            }
            ShapeKind::Cube => {
                let position = Vec3::new(
                    ctx.spread(80.0),
                    ctx.spread(80.0),
                    ctx.spread(80.0),
                );
                let velocity = Vec3::new(
                    ctx.spread(theme.particle_speed),
                    ctx.spread(theme.particle_speed),
                    ctx.spread(theme.particle_speed),
                );
                (position, velocity)
            }
        };

        let rotation_speed = Vec3::new(
            ctx.spread(theme.rotation_speed),
            ctx.spread(theme.rotation_speed),
            ctx.spread(theme.rotation_speed),
        );

        let color = if ctx.coin() {
            theme.primary
        } else {
            theme.secondary
        };

        Self {
            position,
            velocity,
            rotation: Vec3::ZERO,
            rotation_speed,
            original_y: position.y,
            size,
            material: Material {
                color,
                emissive: theme.primary,
                emissive_intensity: 0.5,
                opacity: theme.opacity,
                shininess: 50.0,
            },
        }
    }
}
