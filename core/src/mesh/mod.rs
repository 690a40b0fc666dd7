//! Triangle mesh data types.
//!
//! This module provides the CPU-side mesh representation consumed by the
//! GLB exporter:
//!
//! - [`TriangleMesh`] - Validated, immutable vertex positions and face indices
//! - [`IndexFormat`] - Index data format (u16 or u32)

mod data;

pub use data::{IndexFormat, TriangleMesh};
