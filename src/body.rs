//! Capabilities a moving body offers to the chains attached to it.

use crate::collision::Aabb;
use glam::Vec3;
use std::collections::HashMap;
use std::hash::Hash;

pub trait HasPosition {
    /// Reference point of the body, usually its feet.
    fn position(&self) -> Vec3;
}

pub trait HasBounds {
    fn bounds(&self) -> Aabb;
}

/// Anything with a position and bounds can drag a chain around.
pub trait Body: HasPosition + HasBounds {
    /// Point a following chain's end is attached to: half the body height above its position.
    fn tether_point(&self) -> Vec3 {
        self.position() + Vec3::Y * (self.bounds().height() * 0.5)
    }
}

impl<T: HasPosition + HasBounds + ?Sized> Body for T {}

/// Maps an owner id to the body it currently controls.
pub trait BodyResolver<K> {
    type Body: Body;

    fn resolve(&self, owner: &K) -> Option<&Self::Body>;
}

impl<K: Eq + Hash, B: Body> BodyResolver<K> for HashMap<K, B> {
    type Body = B;

    fn resolve(&self, owner: &K) -> Option<&B> {
        self.get(owner)
    }
}

/// Plain upright box body standing on `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec3,
    pub half_extents: Vec3,
}

impl BodyState {
    pub fn new(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            position,
            half_extents,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

impl HasPosition for BodyState {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl HasBounds for BodyState {
    fn bounds(&self) -> Aabb {
        let center = self.position + Vec3::Y * self.half_extents.y;
        Aabb::from_center_half_extents(center, self.half_extents)
    }
}
