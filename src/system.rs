//! The particle system: one live collection of particles per active theme.
//!
//! A system is seeded wholesale when its theme activates and discarded
//! wholesale on switch; the particle count never changes in between. Each
//! frame [`ParticleSystem::update`] advances every particle under the
//! theme's motion rule:
//!
//! - `matrix`: straight fall, wrapping from y < -100 back to y = 100 with a
//!   fresh random x (recycle in place, never destroy).
//! - `galaxy`: radius-preserving rotation about the y axis plus a bounded
//!   vertical oscillation around the spawn height.
//! - `cyber`: free linear drift inside a toroidal box of side 100.
//!
//! Every rule then advances rotation by the per-particle angular increment.

use crate::particle::Particle;
use crate::spawn::SpawnContext;
use crate::theme::ThemeId;

/// Angular advance per update for the galaxy orbit, scaled by theme speed.
const ORBIT_ANGLE_SCALE: f32 = 0.01;

/// Half-amplitude of the galaxy vertical oscillation.
const ORBIT_Y_AMPLITUDE: f32 = 10.0;

/// Fall floor and respawn ceiling for matrix rain.
const RAIN_FLOOR: f32 = -100.0;
const RAIN_CEILING: f32 = 100.0;

/// Half-size of the cyber drift wrap box.
const DRIFT_BOUND: f32 = 50.0;

/// The live particle collection for one theme.
pub struct ParticleSystem {
    theme_id: ThemeId,
    particles: Vec<Particle>,
    ctx: SpawnContext,
}

impl ParticleSystem {
    /// Seed a fresh system for `theme_id` with its configured particle count.
    pub fn new(theme_id: ThemeId) -> Self {
        Self::with_context(theme_id, SpawnContext::new())
    }

    /// Seed with an explicit random source. Deterministic; used by tests.
    pub fn with_context(theme_id: ThemeId, mut ctx: SpawnContext) -> Self {
        let theme = theme_id.config();
        let particles = (0..theme.particle_count)
            .map(|_| Particle::spawn(theme, &mut ctx))
            .collect();
        Self {
            theme_id,
            particles,
            ctx,
        }
    }

    /// The theme this system was seeded for.
    pub fn theme_id(&self) -> ThemeId {
        self.theme_id
    }

    /// The live particles, in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles. Equals the theme's configured count.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// A seeded system is never empty (all themes configure a positive count).
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame under this system's theme rule.
    pub fn update(&mut self) {
        let speed = self.theme_id.config().particle_speed;

        match self.theme_id {
            ThemeId::Matrix => {
                for p in &mut self.particles {
                    p.position.y -= speed;
                    if p.position.y < RAIN_FLOOR {
                        p.position.y = RAIN_CEILING;
                        p.position.x = self.ctx.spread(100.0);
                    }
                }
            }
            ThemeId::Galaxy => {
                for p in &mut self.particles {
                    let radius = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
                    let angle = p.position.z.atan2(p.position.x) + speed * ORBIT_ANGLE_SCALE;

                    p.position.x = angle.cos() * radius;
                    p.position.z = angle.sin() * radius;

                    p.position.y += p.velocity.y;
                    if (p.position.y - p.original_y).abs() > ORBIT_Y_AMPLITUDE {
                        p.velocity.y = -p.velocity.y;
                    }
                }
            }
            ThemeId::Cyber => {
                for p in &mut self.particles {
                    p.position += p.velocity;

                    for axis in 0..3 {
                        if p.position[axis] > DRIFT_BOUND {
                            p.position[axis] = -DRIFT_BOUND;
                        }
                        if p.position[axis] < -DRIFT_BOUND {
                            p.position[axis] = DRIFT_BOUND;
                        }
                    }
                }
            }
        }

        for p in &mut self.particles {
            p.rotation += p.rotation_speed;
        }
    }
}
