use super::chain::Chain;
use crate::collision::{Aabb, CollisionResponse};
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// Interior points moved out of the body this tick.
    pub pushed_points: usize,
    pub iterations: u32,
    /// Largest link length error before the length passes ran.
    pub initial_error: f32,
    /// Largest link length error after the last length pass.
    pub final_error: f32,
}

pub struct ChainSolver;

impl ChainSolver {
    /// Advances `chain` by one tick.
    ///
    /// Runs endpoint follow, sag relaxation, body push-out and length
    /// relaxation, in that order. Never fails; zero-length spans and links are
    /// skipped rather than divided by.
    pub fn update(chain: &mut Chain, body_position: Vec3, body_bounds: &Aabb) -> SolveResult {
        if chain.follows_body {
            if body_position.is_finite() {
                chain.end = body_position;
            } else {
                log::trace!("ignoring non-finite body position {body_position:?}");
            }
        }

        Self::sag_pass(chain);

        let pushed_points =
            CollisionResponse::resolve_points(&mut chain.points, body_bounds, &chain.config.collision);
        if pushed_points > 0 {
            log::trace!("pushed {pushed_points} chain points out of body");
        }

        Self::pin_endpoints(chain);
        let target_length = chain.target_segment_length();
        let initial_error = Self::length_error(&chain.points, target_length);

        let iterations = chain.config.iterations;
        for _ in 0..iterations {
            Self::length_pass(chain, target_length);
        }

        SolveResult {
            pushed_points,
            iterations,
            initial_error,
            final_error: Self::length_error(&chain.points, target_length),
        }
    }

    /// Eases each interior point toward a sine-shaped droop below the straight span.
    fn sag_pass(chain: &mut Chain) {
        let n = chain.segment_count;
        let start = chain.start;
        let end = chain.end;
        let sag = chain.config.max_sag(start.distance(end), n);
        let smoothing = chain.config.smoothing;

        for i in 1..n {
            let t = i as f32 / n as f32;
            let base = start.lerp(end, t);
            let sagged = base - Vec3::Y * (sag * (t * PI).sin());
            chain.points[i] = chain.points[i].lerp(sagged, smoothing);
        }
    }

    fn pin_endpoints(chain: &mut Chain) {
        let n = chain.segment_count;
        chain.points[0] = chain.start;
        chain.points[n] = chain.end;
    }

    // Sequential sweep: each pair sees the corrections made to the pair before it.
    fn length_pass(chain: &mut Chain, target_length: f32) {
        let n = chain.segment_count;
        let stiffness = chain.config.stiffness;
        let points = &mut chain.points;

        for i in 1..=n {
            let previous = points[i - 1];
            let current = points[i];

            let delta = current - previous;
            let distance = delta.length();
            if distance <= 0.0 {
                continue;
            }

            let difference = (distance - target_length) / distance;
            let offset = delta * (0.5 * difference * stiffness);

            if i > 1 {
                points[i - 1] = previous + offset;
            }
            if i < n {
                points[i] = current - offset;
            }
        }
    }

    fn length_error(points: &[Vec3], target_length: f32) -> f32 {
        points
            .windows(2)
            .map(|w| (w[0].distance(w[1]) - target_length).abs())
            .fold(0.0, f32::max)
    }
}
