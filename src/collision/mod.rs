mod aabb;
mod response;

pub use aabb::{Aabb, Face};
pub use response::{CollisionConfig, CollisionResponse};
