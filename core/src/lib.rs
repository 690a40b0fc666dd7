//! # Meshport Core
//!
//! OBJ to binary glTF (GLB) conversion.
//!
//! The pipeline is a chain of pure transformations: parse an OBJ-subset
//! source into a [`mesh::TriangleMesh`], pack its positions and indices into
//! an aligned little-endian buffer, describe the buffer with glTF accessors
//! and a minimal scene graph, and assemble the two-chunk GLB container.
//! Most callers only need [`convert::obj_to_glb`].

pub mod convert;
pub mod error;
pub mod gltf;
pub mod mesh;
pub mod obj;

pub use convert::{obj_to_glb, obj_to_glb_bytes, ConvertSummary};
pub use error::ConvertError;
pub use gltf::GlbOptions;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
