use super::season::Season;
use crate::consts::PARTICLE_COUNT;
use fastrand::Rng;

/// Particles re-enter just above the top edge.
const SPAWN_Y: f64 = -10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// Degrees, 0..360.
    pub rotation: f64,
    pub color: Option<&'static str>,
}

/// What a renderer should draw for one particle.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleShape {
    Dot {
        x: f64,
        y: f64,
        radius: f64,
    },
    Square {
        x: f64,
        y: f64,
        size: f64,
        rotation: f64,
        color: &'static str,
    },
}

/// Seasonal particles behind the title. Advanced one frame per `step`; the render
/// loop that calls it lives outside this crate.
#[derive(Debug, Clone)]
pub struct ParticleField {
    season: Season,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: Rng,
}

impl ParticleField {
    pub fn new(season: Season, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            season,
            width,
            height,
            particles: Vec::with_capacity(PARTICLE_COUNT),
            rng: Rng::with_seed(seed),
        };
        field.respawn();
        field
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Throws away every particle and spawns a fresh set along the top edge.
    pub fn respawn(&mut self) {
        let palette = self.season.particle_palette();
        self.particles.clear();
        for _ in 0..PARTICLE_COUNT {
            let color = if palette.is_empty() {
                None
            } else {
                Some(palette[self.rng.usize(..palette.len())])
            };
            self.particles.push(Particle {
                x: self.rng.f64() * self.width,
                y: SPAWN_Y,
                size: self.rng.f64() * 3.0 + 2.0,
                speed_x: self.rng.f64() * 2.0 - 1.0,
                speed_y: self.rng.f64() * 2.0 + 1.0,
                rotation: self.rng.f64() * 360.0,
                color,
            });
        }
    }

    pub fn step(&mut self) {
        if !self.season.has_particles() {
            return;
        }
        for p in &mut self.particles {
            p.y += p.speed_y;
            p.x += p.speed_x;
            p.rotation = (p.rotation + 1.0) % 360.0;

            if p.y > self.height {
                p.y = SPAWN_Y;
                p.x = self.rng.f64() * self.width;
            }
        }
    }

    pub fn shapes(&self) -> Vec<ParticleShape> {
        match self.season {
            Season::Summer => Vec::new(),
            Season::Winter => self
                .particles
                .iter()
                .map(|p| ParticleShape::Dot {
                    x: p.x,
                    y: p.y,
                    radius: p.size,
                })
                .collect(),
            Season::Spring | Season::Fall => self
                .particles
                .iter()
                .map(|p| ParticleShape::Square {
                    x: p.x,
                    y: p.y,
                    size: p.size,
                    rotation: p.rotation,
                    color: p.color.unwrap_or("white"),
                })
                .collect(),
        }
    }
}
