use glam::Vec3;

/// Axis-aligned box a moving body occupies for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Box face a point was pushed through, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    MinX,
    MaxX,
    MinY,
    MaxY,
    MinZ,
    MaxZ,
}

impl Aabb {
    /// A box no finite point lies inside, for ticks without a body.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Half-open containment: a point on a max face is outside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
            && point.z >= self.min.z
            && point.z < self.max.z
    }

    /// Face with the smallest distance to `point`.
    ///
    /// Ties resolve X before Y before Z, min before max.
    pub fn nearest_face(&self, point: Vec3) -> Face {
        let distances = [
            (Face::MinX, (point.x - self.min.x).abs()),
            (Face::MaxX, (point.x - self.max.x).abs()),
            (Face::MinY, (point.y - self.min.y).abs()),
            (Face::MaxY, (point.y - self.max.y).abs()),
            (Face::MinZ, (point.z - self.min.z).abs()),
            (Face::MaxZ, (point.z - self.max.z).abs()),
        ];

        let mut best = distances[0];
        for candidate in &distances[1..] {
            if candidate.1 < best.1 {
                best = *candidate;
            }
        }
        best.0
    }

    /// Moves `point` just past its nearest face, leaving the other two axes alone.
    pub fn push_out(&self, point: Vec3, margin: f32) -> Vec3 {
        let mut result = point;
        match self.nearest_face(point) {
            Face::MinX => result.x = self.min.x - margin,
            Face::MaxX => result.x = self.max.x + margin,
            Face::MinY => result.y = self.min.y - margin,
            Face::MaxY => result.y = self.max.y + margin,
            Face::MinZ => result.z = self.min.z - margin,
            Face::MaxZ => result.z = self.max.z + margin,
        }
        result
    }
}
