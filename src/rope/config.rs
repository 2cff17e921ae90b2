use crate::collision::CollisionConfig;
use crate::error::{ChainError, Result};

/// Tuning for the sag, smoothing and length passes of a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeConfig {
    /// Sag weight per segment. Not physical gravity.
    pub gravity: f32,
    /// Upper bound of sag as a fraction of the span.
    pub sag_span_ratio: f32,
    pub sag_weight_factor: f32,
    /// Fraction of the way each interior point moves toward its sag target per tick.
    pub smoothing: f32,
    pub stiffness: f32,
    pub iterations: u32,
    pub collision: CollisionConfig,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            sag_span_ratio: 0.3,
            sag_weight_factor: 0.1,
            smoothing: 0.1,
            stiffness: 0.8,
            iterations: 5,
            collision: CollisionConfig::default(),
        }
    }
}

impl RopeConfig {
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_collision(mut self, collision: CollisionConfig) -> Self {
        self.collision = collision;
        self
    }

    /// Largest downward offset for a span of `distance` split into `segment_count` links.
    pub fn max_sag(&self, distance: f32, segment_count: usize) -> f32 {
        (distance * self.sag_span_ratio)
            .min(self.gravity * segment_count as f32 * self.sag_weight_factor)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("gravity", self.gravity),
            ("sag_span_ratio", self.sag_span_ratio),
            ("sag_weight_factor", self.sag_weight_factor),
            ("smoothing", self.smoothing),
            ("stiffness", self.stiffness),
            ("collision margin", self.collision.margin),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ChainError::invalid(format!("{name} must be finite, got {value}")));
        }

        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ChainError::invalid(format!(
                "smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        if !(self.stiffness > 0.0 && self.stiffness <= 1.0) {
            return Err(ChainError::invalid(format!(
                "stiffness must be in (0, 1], got {}",
                self.stiffness
            )));
        }
        if self.collision.margin < 0.0 {
            return Err(ChainError::invalid(format!(
                "collision margin must not be negative, got {}",
                self.collision.margin
            )));
        }
        Ok(())
    }
}
