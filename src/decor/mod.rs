//! Cosmetic surroundings of the polygon. They read the current date and theme and
//! never feed back into the collection or the geometry.

pub mod noise;
pub mod particles;
pub mod season;
pub mod theme;

pub use noise::NoiseCanvas;
pub use particles::{Particle, ParticleField, ParticleShape};
pub use season::{favicon_path, Season};
pub use theme::{Palette, ThemeMode, ThemePreference};
