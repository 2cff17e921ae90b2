//! # rope-chain
//!
//! Real-time rope chains for games: a fixed number of points hanging between
//! two endpoints, relaxed once per tick into a sagging, length-constrained
//! curve that gets pushed out of the body dragging it around.
//!
//! ## Features
//! - Per-tick solver: sag relaxation, box push-out, sequential length relaxation
//! - Follow mode, where the chain end tracks a moving body
//! - Owner registry that drives every chain from a body lookup each tick
//! - Line-list vertex generation for debug or in-game drawing
//!
//! ## Example
//! ```rust,ignore
//! use rope_chain::{Aabb, Chain};
//! use glam::Vec3;
//!
//! let mut chain = Chain::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(10.0, 10.0, 0.0), 16)?;
//!
//! for _ in 0..60 {
//!     let result = chain.update(Vec3::ZERO, &Aabb::EMPTY);
//!     println!("length error: {}", result.final_error);
//! }
//! println!("lowest point: {:?}", chain.lowest_point());
//! ```

pub mod body;
pub mod collision;
pub mod error;
pub mod registry;
pub mod render;
pub mod rope;

pub use body::{Body, BodyResolver, BodyState, HasBounds, HasPosition};
pub use collision::{Aabb, CollisionConfig, CollisionResponse, Face};
pub use error::ChainError;
pub use registry::{
    ChainRegistry, TickSummary, ANCHOR_OFFSET, CHAIN_END_OFFSET, CHAIN_START_OFFSET,
    DEFAULT_SEGMENT_COUNT,
};
pub use render::{ChainLineBuilder, LineVertex};
pub use rope::{Chain, ChainBuilder, ChainSolver, RopeConfig, SolveResult};
