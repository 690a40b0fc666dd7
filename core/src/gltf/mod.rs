//! glTF 2.0 export.
//!
//! Converts a [`TriangleMesh`] into a self-contained binary glTF (`.glb`)
//! container: positions and indices packed into one embedded buffer,
//! described by a minimal scene graph (one buffer, two buffer views, two
//! accessors, one mesh with one primitive, one node, one scene).
//!
//! # Example
//!
//! ```ignore
//! use meshport_core::gltf::{export_glb, GlbOptions};
//! use meshport_core::obj::parse_obj_str;
//!
//! let mesh = parse_obj_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
//! let glb = export_glb(&mesh, &GlbOptions::default()).unwrap();
//! std::fs::write("triangle.glb", &glb).unwrap();
//! ```

pub mod buffer;
mod exporter;
#[cfg(test)]
mod tests;

pub use buffer::{position_bounds, BlockRange, PackedBuffer};

use crate::error::ConvertError;
use crate::mesh::{IndexFormat, TriangleMesh};

/// Options for GLB export.
#[derive(Debug, Clone, Default)]
pub struct GlbOptions {
    /// Name recorded on the exported glTF mesh.
    pub label: Option<String>,
    /// Index width to encode. `None` picks u16 when every index fits 16 bits
    /// and escalates to u32 otherwise; forcing [`IndexFormat::Uint16`] on a
    /// larger mesh fails with [`ConvertError::IndexRangeOverflow`].
    pub index_format: Option<IndexFormat>,
}

/// Export a mesh to a binary glTF (`.glb`) byte stream.
///
/// The same mesh and options always produce byte-identical output.
pub fn export_glb(mesh: &TriangleMesh, options: &GlbOptions) -> Result<Vec<u8>, ConvertError> {
    let index_format = match options.index_format {
        Some(format) => format,
        None => {
            let format = mesh.index_format();
            if format == IndexFormat::Uint32 {
                log::warn!(
                    "mesh has {} vertices, escalating indices to u32",
                    mesh.vertex_count()
                );
            }
            format
        }
    };

    let buffer = PackedBuffer::pack(mesh, index_format)?;

    let mut ctx = exporter::ExportContext::new(buffer);
    ctx.build_buffer_views();
    ctx.build_accessors(mesh);
    ctx.build_mesh(options.label.as_deref());
    ctx.build_scene();
    ctx.to_glb()
}
