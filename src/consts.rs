/// A collection never shrinks below this many skills.
pub const MIN_SKILLS: usize = 3;

/// A collection never grows beyond this many skills.
pub const MAX_SKILLS: usize = 12;

/// Highest score a skill can hold. Scores are scaled linearly against it.
pub const MAX_SCORE: u8 = 10;

/// Lowest score a skill can hold.
pub const MIN_SCORE: u8 = 0;

/// Score given to freshly inserted skills.
pub const DEFAULT_SCORE: u8 = 5;

/// Radius of the guide circle (a score of MAX_SCORE lands on it).
pub const GUIDE_RADIUS: f64 = 200.0;

/// Radius the labels sit on, outside the guide circle.
pub const LABEL_RADIUS: f64 = 260.0;

/// Horizontal nudge for start/end aligned labels.
pub const LABEL_OFFSET_X: f64 = 15.0;

/// Vertical nudge for center aligned labels.
pub const LABEL_OFFSET_Y: f64 = 10.0;

/// Half the side of the square SVG viewBox (`-350 -350 700 700`).
pub const VIEW_HALF_EXTENT: f64 = 350.0;

/// How long the "at capacity" shake cue stays active.
pub const REJECTION_CUE_MS: u64 = 500;

/// Contrast range exposed through the background contrast slider.
pub const MIN_CONTRAST: f64 = 0.4;
pub const MAX_CONTRAST: f64 = 1.0;

/// Sliders are linear on 0..=100.
pub const SLIDER_MAX: f64 = 100.0;

/// Number of particles in the seasonal title animation.
pub const PARTICLE_COUNT: usize = 30;

/// Noise canvas is rendered at viewport / NOISE_DOWNSCALE and stretched back up.
pub const NOISE_DOWNSCALE: f64 = 1.5;

/// Largest noise canvas side, in pixels. Bigger viewports get a stretched canvas.
pub const MAX_NOISE_SIDE: u32 = 4096;
