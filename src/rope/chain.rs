use super::config::RopeConfig;
use super::solver::{ChainSolver, SolveResult};
use crate::collision::Aabb;
use crate::error::{ChainError, Result};
use glam::Vec3;

/// One simulated rope: two endpoints and `segment_count + 1` points between them.
#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) start: Vec3,
    pub(crate) end: Vec3,
    pub(crate) points: Vec<Vec3>,
    pub(crate) segment_count: usize,
    pub(crate) follows_body: bool,
    pub(crate) config: RopeConfig,
}

impl Chain {
    /// Straight chain from `start` to `end` with default tuning.
    pub fn new(start: Vec3, end: Vec3, segment_count: usize) -> Result<Self> {
        Self::builder()
            .start(start)
            .end(end)
            .segment_count(segment_count)
            .build()
    }

    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Advances the chain by one tick. See [`ChainSolver::update`].
    pub fn update(&mut self, body_position: Vec3, body_bounds: &Aabb) -> SolveResult {
        ChainSolver::update(self, body_position, body_bounds)
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Owned copy of the current points.
    pub fn snapshot(&self) -> Vec<Vec3> {
        self.points.clone()
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Moves the anchor. Takes effect on the next tick; non-finite values are ignored.
    pub fn set_start(&mut self, start: Vec3) {
        if start.is_finite() {
            self.start = start;
        } else {
            log::trace!("ignoring non-finite chain start {start:?}");
        }
    }

    /// Moves the free end. Overwritten on the next tick when the chain follows a body.
    /// Non-finite values are ignored.
    pub fn set_end(&mut self, end: Vec3) {
        if end.is_finite() {
            self.end = end;
        } else {
            log::trace!("ignoring non-finite chain end {end:?}");
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn follows_body(&self) -> bool {
        self.follows_body
    }

    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    /// Rest length each link is pulled toward this tick.
    pub fn target_segment_length(&self) -> f32 {
        self.start.distance(self.end) / self.segment_count as f32
    }

    /// Sum of the current link lengths.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Lowest point along the chain.
    pub fn lowest_point(&self) -> Option<Vec3> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    }
}

pub struct ChainBuilder {
    start: Vec3,
    end: Vec3,
    segment_count: usize,
    follows_body: bool,
    config: RopeConfig,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            start: Vec3::ZERO,
            end: Vec3::ZERO,
            segment_count: 16,
            follows_body: false,
            config: RopeConfig::default(),
        }
    }

    pub fn start(mut self, start: Vec3) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: Vec3) -> Self {
        self.end = end;
        self
    }

    pub fn segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn follow_body(mut self, follows_body: bool) -> Self {
        self.follows_body = follows_body;
        self
    }

    pub fn config(mut self, config: RopeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Chain> {
        if self.segment_count < 1 {
            return Err(ChainError::invalid("segment count must be at least 1"));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChainError::invalid("chain endpoints must be finite"));
        }
        self.config.validate()?;

        let points = Self::straight_line(self.start, self.end, self.segment_count);
        Ok(Chain {
            start: self.start,
            end: self.end,
            points,
            segment_count: self.segment_count,
            follows_body: self.follows_body,
            config: self.config,
        })
    }

    fn straight_line(start: Vec3, end: Vec3, segment_count: usize) -> Vec<Vec3> {
        let mut points: Vec<Vec3> = (0..=segment_count)
            .map(|i| start.lerp(end, i as f32 / segment_count as f32))
            .collect();
        points[0] = start;
        points[segment_count] = end;
        points
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
