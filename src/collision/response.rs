use glam::Vec3;

use super::aabb::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    pub margin: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self { margin: 0.1 }
    }
}

impl CollisionConfig {
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }
}

pub struct CollisionResponse;

impl CollisionResponse {
    /// Pushes every interior point that sits inside `bounds` out through its
    /// nearest face. The first and last points are never touched.
    ///
    /// Returns the number of points moved.
    pub fn resolve_points(points: &mut [Vec3], bounds: &Aabb, config: &CollisionConfig) -> usize {
        let n = points.len();
        if n < 3 {
            return 0;
        }

        let mut pushed = 0;
        for point in &mut points[1..n - 1] {
            if bounds.contains_point(*point) {
                *point = bounds.push_out(*point, config.margin);
                pushed += 1;
            }
        }
        pushed
    }

    pub fn colliding_points(points: &[Vec3], bounds: &Aabb) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| bounds.contains_point(**p))
            .map(|(i, _)| i)
            .collect()
    }
}
