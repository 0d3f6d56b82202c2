//! Render hand-off module
//!
//! The simulation does not draw anything itself. Once per frame it fills a
//! [`DrawList`] with plain-old-data instances the external voxel renderer
//! can copy straight into its vertex/instance buffers.

pub mod instances;

pub use instances::{DrawList, ModelDraw, ModelInstance, TrailVertex};
