//! Particle emitter lifecycle management.
//!
//! Owns the collection of live particles and the spawn configuration,
//! providing update / apply-force / expiry with no rendering coupling.
//! Spawn attributes are sampled as base ± spread, either inside a cube or
//! on a sphere shell around the emitter.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::particles::particle::Particle;

/// Region shape used for sampling spawn positions and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitterShape {
    /// Uniform inside an axis-aligned box: base ± spread/2 per axis
    Cube,
    /// On a sphere shell of `pos_radius` around the base; velocities point
    /// radially outward
    Sphere,
}

/// Spawn configuration for a [`ParticleSystem`].
///
/// Serializable so effects can be authored as JSON files and loaded at
/// runtime. Size, color, and opacity are static per particle (sampled
/// once at spawn); animated attribute curves are out of scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// How long the emitter keeps spawning (seconds)
    pub lifespan: f32,
    /// Lifetime assigned to each spawned particle (seconds)
    pub particle_lifespan: f32,
    /// Particles spawned per second
    pub gen_rate: f32,

    /// Spawn position sampling shape
    pub pos_style: EmitterShape,
    /// Center of the spawn region
    pub pos_base: Vec3,
    /// Extent of the spawn region (cube style)
    pub pos_spread: Vec3,
    /// Distance from base at which particles start (sphere style)
    pub pos_radius: f32,

    /// Velocity sampling shape
    pub vel_style: EmitterShape,
    /// Base velocity (cube style)
    pub vel_base: Vec3,
    /// Velocity spread (cube style)
    pub vel_spread: Vec3,
    /// Base radial speed (sphere style)
    pub speed_base: f32,
    /// Radial speed spread (sphere style)
    pub speed_spread: f32,

    /// Base constant acceleration
    pub acc_base: Vec3,
    /// Acceleration spread
    pub acc_spread: Vec3,

    /// Base sprite rotation (radians)
    pub angle_base: f32,
    /// Sprite rotation spread
    pub angle_spread: f32,
    /// Base sprite rotation rate (radians/second)
    pub angle_vel_base: f32,
    /// Sprite rotation rate spread
    pub angle_vel_spread: f32,
    /// Base sprite rotation acceleration (radians/second²)
    pub angle_acc_base: f32,
    /// Sprite rotation acceleration spread
    pub angle_acc_spread: f32,

    /// Base render radius (meters)
    pub radius_base: f32,
    /// Render radius spread
    pub radius_spread: f32,

    /// Base RGB color, channels in 0..=1
    pub color_base: Vec3,
    /// Color spread
    pub color_spread: Vec3,

    /// Base opacity in 0..=1
    pub opacity_base: f32,
    /// Opacity spread
    pub opacity_spread: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            lifespan: 1.0,
            particle_lifespan: 1.0,
            gen_rate: 60.0,
            pos_style: EmitterShape::Cube,
            pos_base: Vec3::ZERO,
            pos_spread: Vec3::ZERO,
            pos_radius: 0.0,
            vel_style: EmitterShape::Cube,
            vel_base: Vec3::ZERO,
            vel_spread: Vec3::ZERO,
            speed_base: 0.0,
            speed_spread: 0.0,
            acc_base: Vec3::ZERO,
            acc_spread: Vec3::ZERO,
            angle_base: 0.0,
            angle_spread: 0.0,
            angle_vel_base: 0.0,
            angle_vel_spread: 0.0,
            angle_acc_base: 0.0,
            angle_acc_spread: 0.0,
            radius_base: 1.0,
            radius_spread: 0.0,
            color_base: Vec3::ONE,
            color_spread: Vec3::ZERO,
            opacity_base: 1.0,
            opacity_spread: 0.0,
        }
    }
}

/// Manages the full lifecycle of an emitter's particles.
pub struct ParticleSystem {
    config: EmitterConfig,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create an emitter with entropy-seeded randomness.
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an emitter with a fixed seed for reproducible effects.
    pub fn with_seed(config: EmitterConfig, seed: u64) -> Self {
        Self {
            config,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance all live particles, cull the dead, and spawn new ones
    /// while the emitter itself is alive.
    pub fn update(&mut self, dt: f32) {
        self.particles.retain_mut(|p| {
            if p.is_dead() {
                return false;
            }
            p.update(dt);
            true
        });

        if !self.is_dead() {
            self.gen_particles(dt);
        }
        self.config.lifespan -= dt;
    }

    /// Spawn `round(gen_rate * dt)` particles.
    fn gen_particles(&mut self, dt: f32) {
        let count = (self.config.gen_rate * dt).round() as usize;
        for _ in 0..count {
            let particle = self.gen_particle();
            self.particles.push(particle);
        }
    }

    /// Sample one particle from the emitter configuration.
    fn gen_particle(&mut self) -> Particle {
        let config = self.config;

        let pos = match config.pos_style {
            EmitterShape::Cube => random_vec(&mut self.rng, config.pos_base, config.pos_spread),
            EmitterShape::Sphere => {
                config.pos_base + random_unit_vec(&mut self.rng) * config.pos_radius
            }
        };

        let vel = match config.vel_style {
            EmitterShape::Cube => random_vec(&mut self.rng, config.vel_base, config.vel_spread),
            EmitterShape::Sphere => {
                let direction = (pos - config.pos_base).normalize_or_zero();
                let speed = random_num(&mut self.rng, config.speed_base, config.speed_spread);
                direction * speed
            }
        };

        Particle::new(
            pos,
            vel,
            random_vec(&mut self.rng, config.acc_base, config.acc_spread),
            config.particle_lifespan,
            random_num(&mut self.rng, config.angle_base, config.angle_spread),
            random_num(&mut self.rng, config.angle_vel_base, config.angle_vel_spread),
            random_num(&mut self.rng, config.angle_acc_base, config.angle_acc_spread),
            random_num(&mut self.rng, config.radius_base, config.radius_spread),
            random_vec(&mut self.rng, config.color_base, config.color_spread),
            random_num(&mut self.rng, config.opacity_base, config.opacity_spread),
        )
    }

    /// Apply an external force to every live particle (e.g. wind).
    pub fn apply_force(&mut self, force: Vec3) {
        for particle in &mut self.particles {
            particle.apply_force(force);
        }
    }

    /// Has the emitter finished spawning?
    pub fn is_dead(&self) -> bool {
        self.config.lifespan < 0.0
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True if no particles are live.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Sample base ± spread/2.
fn random_num(rng: &mut StdRng, base: f32, spread: f32) -> f32 {
    base + spread * (rng.r#gen::<f32>() - 0.5)
}

/// Sample base ± spread/2 per component.
fn random_vec(rng: &mut StdRng, base: Vec3, spread: Vec3) -> Vec3 {
    let rand3 = Vec3::new(
        rng.r#gen::<f32>() - 0.5,
        rng.r#gen::<f32>() - 0.5,
        rng.r#gen::<f32>() - 0.5,
    );
    base + spread * rand3
}

/// Uniform direction on the unit sphere.
fn random_unit_vec(rng: &mut StdRng) -> Vec3 {
    let z = 2.0 * rng.r#gen::<f32>() - 1.0;
    let t = std::f32::consts::TAU * rng.r#gen::<f32>();
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * t.cos(), r * t.sin(), z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_rate_honored() {
        let config = EmitterConfig {
            gen_rate: 60.0,
            lifespan: 10.0,
            ..EmitterConfig::default()
        };
        let mut system = ParticleSystem::with_seed(config, 7);

        // One 60 Hz frame at 60 particles/second: one particle.
        system.update(1.0 / 60.0);
        assert_eq!(system.len(), 1);

        // A full second: sixty more.
        system.update(1.0);
        assert_eq!(system.len(), 61);
    }

    #[test]
    fn test_dead_particles_are_culled() {
        let config = EmitterConfig {
            gen_rate: 10.0,
            lifespan: 0.05, // emitter dies almost immediately
            particle_lifespan: 0.1,
            ..EmitterConfig::default()
        };
        let mut system = ParticleSystem::with_seed(config, 7);

        system.update(0.1);
        assert!(!system.is_empty());
        assert!(system.is_dead());

        // A few more updates: particles age out and nothing respawns.
        system.update(0.1);
        system.update(0.1);
        system.update(0.1);
        assert!(system.is_empty());
    }

    #[test]
    fn test_forces_reach_particle_bodies() {
        let config = EmitterConfig {
            gen_rate: 60.0,
            lifespan: 10.0,
            particle_lifespan: 10.0,
            ..EmitterConfig::default()
        };
        let mut system = ParticleSystem::with_seed(config, 7);
        system.update(1.0 / 60.0);

        system.apply_force(Vec3::new(0.0, -9.81, 0.0));
        system.update(1.0 / 60.0);

        // The particle that was alive when the force landed is falling;
        // ones spawned afterwards are not.
        assert!(system.particles()[0].vel().y < 0.0);
    }

    #[test]
    fn test_sphere_spawn_sits_on_shell() {
        let config = EmitterConfig {
            gen_rate: 600.0,
            lifespan: 10.0,
            pos_style: EmitterShape::Sphere,
            pos_base: Vec3::new(1.0, 2.0, 3.0),
            pos_radius: 2.0,
            ..EmitterConfig::default()
        };
        let mut system = ParticleSystem::with_seed(config, 42);
        system.update(1.0 / 60.0);

        assert!(!system.is_empty());
        for particle in system.particles() {
            let r = particle.pos().distance(config.pos_base);
            assert!((r - 2.0).abs() < 1e-4, "spawned off the shell: r = {r}");
        }
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = EmitterConfig {
            gen_rate: 120.0,
            pos_style: EmitterShape::Sphere,
            pos_radius: 1.5,
            ..EmitterConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: EmitterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gen_rate, 120.0);
        assert_eq!(back.pos_style, EmitterShape::Sphere);
        assert_eq!(back.pos_radius, 1.5);
    }
}
