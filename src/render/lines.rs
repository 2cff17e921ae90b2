use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One end of a line in a line-list buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    fn grey(position: Vec3, brightness: f32) -> Self {
        Self::new(position, [brightness, brightness, brightness, 1.0])
    }
}

/// Edges of a unit cube outline, as corner sign pairs, with their brightness.
const LINK_EDGES: [([f32; 3], [f32; 3], f32); 12] = [
    // bottom
    ([-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], 0.3),
    ([1.0, -1.0, -1.0], [1.0, -1.0, 1.0], 0.3),
    ([1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], 0.3),
    ([-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], 0.3),
    // top
    ([-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], 0.5),
    ([1.0, 1.0, -1.0], [1.0, 1.0, 1.0], 0.5),
    ([1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], 0.5),
    ([-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], 0.5),
    // verticals
    ([-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], 0.4),
    ([1.0, -1.0, -1.0], [1.0, 1.0, -1.0], 0.4),
    ([1.0, -1.0, 1.0], [1.0, 1.0, 1.0], 0.4),
    ([-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], 0.4),
];

/// Builds line-list vertices for a chain: the links between points plus a
/// small cube outline around every point.
#[derive(Debug, Clone, Copy)]
pub struct ChainLineBuilder {
    pub link_half_size: f32,
    pub chain_brightness: f32,
    /// Subtracted from every position, for camera-relative buffers.
    pub origin: Vec3,
}

impl Default for ChainLineBuilder {
    fn default() -> Self {
        Self {
            link_half_size: 0.08,
            chain_brightness: 0.4,
            origin: Vec3::ZERO,
        }
    }
}

impl ChainLineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_half_size(mut self, link_half_size: f32) -> Self {
        self.link_half_size = link_half_size;
        self
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn vertex_count(point_count: usize) -> usize {
        point_count.saturating_sub(1) * 2 + point_count * LINK_EDGES.len() * 2
    }

    pub fn build(&self, points: &[Vec3]) -> Vec<LineVertex> {
        let mut vertices = Vec::with_capacity(Self::vertex_count(points.len()));
        self.extend(points, &mut vertices);
        vertices
    }

    /// Appends to `vertices`, so several chains can share one buffer.
    pub fn extend(&self, points: &[Vec3], vertices: &mut Vec<LineVertex>) {
        for pair in points.windows(2) {
            vertices.push(LineVertex::grey(pair[0] - self.origin, self.chain_brightness));
            vertices.push(LineVertex::grey(pair[1] - self.origin, self.chain_brightness));
        }

        for point in points {
            self.push_link(*point - self.origin, vertices);
        }
    }

    fn push_link(&self, center: Vec3, vertices: &mut Vec<LineVertex>) {
        for (from, to, brightness) in LINK_EDGES {
            let a = center + Vec3::from_array(from) * self.link_half_size;
            let b = center + Vec3::from_array(to) * self.link_half_size;
            vertices.push(LineVertex::grey(a, brightness));
            vertices.push(LineVertex::grey(b, brightness));
        }
    }
}
