//! Rope chain module
//!
//! Chain state, tuning, and the per-tick solver that sags, pushes out and
//! length-relaxes the chain points.

pub mod chain;
pub mod config;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use config::RopeConfig;
pub use solver::{ChainSolver, SolveResult};
