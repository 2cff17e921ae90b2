//! Rendering data module
//!
//! CPU-side line-list generation for drawing chains. Uploading and drawing the
//! buffers is left to the host renderer.

pub mod lines;

pub use lines::{ChainLineBuilder, LineVertex};
