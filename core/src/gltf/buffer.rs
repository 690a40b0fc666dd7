//! Binary buffer packing for GLB export.
//!
//! Serializes a [`TriangleMesh`] into the single little-endian buffer a GLB
//! container embeds: the vertex position block first, then the index block,
//! each starting on a 4-byte boundary per the glTF binary-buffer alignment
//! rules.

use crate::error::ConvertError;
use crate::mesh::{IndexFormat, TriangleMesh};

/// A contiguous byte range within a packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    /// Offset of the block from the start of the buffer, in bytes.
    pub byte_offset: usize,
    /// Length of the block, in bytes. Excludes alignment padding.
    pub byte_length: usize,
}

/// The packed binary payload of a GLB container.
///
/// Holds the vertex position block, zero-filled alignment padding, and the
/// index block, plus the byte range of each block.
#[derive(Debug, Clone)]
pub struct PackedBuffer {
    data: Vec<u8>,
    vertex_block: BlockRange,
    index_block: BlockRange,
    index_format: IndexFormat,
}

impl PackedBuffer {
    /// Pack a mesh's vertices and faces into one buffer.
    ///
    /// Vertices are serialized as three little-endian f32 values each, in
    /// declaration order. Face indices follow, in the width given by
    /// `index_format`; fails with [`ConvertError::IndexRangeOverflow`] if an
    /// index does not fit that width.
    pub fn pack(mesh: &TriangleMesh, index_format: IndexFormat) -> Result<Self, ConvertError> {
        let vertex_len = mesh.vertex_count() * 12;
        let index_len = mesh.index_count() * index_format.size();
        let mut data = Vec::with_capacity(align_to_4(vertex_len) + index_len);

        for vertex in mesh.vertices() {
            for component in vertex {
                data.extend_from_slice(&component.to_le_bytes());
            }
        }
        let vertex_block = BlockRange {
            byte_offset: 0,
            byte_length: data.len(),
        };

        // Padding between blocks is not index data.
        data.resize(align_to_4(data.len()), 0);

        let index_offset = data.len();
        for face in mesh.faces() {
            for &index in face {
                if index > index_format.max_index() {
                    return Err(ConvertError::IndexRangeOverflow {
                        index,
                        format: index_format,
                    });
                }
                match index_format {
                    IndexFormat::Uint16 => data.extend_from_slice(&(index as u16).to_le_bytes()),
                    IndexFormat::Uint32 => data.extend_from_slice(&index.to_le_bytes()),
                }
            }
        }
        let index_block = BlockRange {
            byte_offset: index_offset,
            byte_length: data.len() - index_offset,
        };

        Ok(Self {
            data,
            vertex_block,
            index_block,
            index_format,
        })
    }

    /// Get the packed bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the byte range of the vertex position block.
    pub fn vertex_block(&self) -> BlockRange {
        self.vertex_block
    }

    /// Get the byte range of the index block.
    pub fn index_block(&self) -> BlockRange {
        self.index_block
    }

    /// Get the index format the buffer was packed with.
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }
}

/// Round a length up to the next multiple of 4.
pub(super) fn align_to_4(len: usize) -> usize {
    len + (4 - (len % 4)) % 4
}

/// Compute component-wise position bounds across all vertices.
///
/// A single vertex yields `min == max`, which is a valid degenerate
/// bounding box.
pub fn position_bounds(vertices: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for vertex in vertices {
        for c in 0..3 {
            if vertex[c] < min[c] {
                min[c] = vertex[c];
            }
            if vertex[c] > max[c] {
                max[c] = vertex[c];
            }
        }
    }

    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> TriangleMesh {
        TriangleMesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_pack_u16_layout() {
        let buffer = PackedBuffer::pack(&triangle(), IndexFormat::Uint16).unwrap();

        assert_eq!(buffer.vertex_block().byte_offset, 0);
        assert_eq!(buffer.vertex_block().byte_length, 36);
        assert_eq!(buffer.index_block().byte_offset, 36);
        assert_eq!(buffer.index_block().byte_length, 6);
        assert_eq!(buffer.data().len(), 42);

        // Indices 0, 1, 2 as little-endian u16.
        assert_eq!(&buffer.data()[36..], &[0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_pack_vertices_little_endian() {
        let buffer = PackedBuffer::pack(&triangle(), IndexFormat::Uint16).unwrap();
        let second_vertex_x = f32::from_le_bytes(buffer.data()[12..16].try_into().unwrap());
        assert_eq!(second_vertex_x, 1.0);
    }

    #[test]
    fn test_pack_u32_layout() {
        let buffer = PackedBuffer::pack(&triangle(), IndexFormat::Uint32).unwrap();
        assert_eq!(buffer.index_block().byte_length, 12);
        assert_eq!(&buffer.data()[36..40], &[0, 0, 0, 0]);
        assert_eq!(&buffer.data()[40..44], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_pack_block_alignment() {
        // 5 vertices = 60 bytes, already aligned; index block starts at 60.
        let mesh = TriangleMesh::new(vec![[0.0, 0.0, 0.0]; 5], vec![[0, 1, 2], [2, 3, 4]]).unwrap();
        let buffer = PackedBuffer::pack(&mesh, IndexFormat::Uint16).unwrap();
        assert_eq!(buffer.index_block().byte_offset % 4, 0);
        assert_eq!(buffer.index_block().byte_offset, 60);
        assert_eq!(buffer.index_block().byte_length, 12);
    }

    #[test]
    fn test_pack_forced_u16_overflow() {
        let mesh =
            TriangleMesh::new(vec![[0.0, 0.0, 0.0]; 65537], vec![[0, 1, 65536]]).unwrap();
        match PackedBuffer::pack(&mesh, IndexFormat::Uint16) {
            Err(ConvertError::IndexRangeOverflow { index, format }) => {
                assert_eq!(index, 65536);
                assert_eq!(format, IndexFormat::Uint16);
            }
            other => panic!("expected IndexRangeOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_position_bounds() {
        let (min, max) = position_bounds(triangle().vertices());
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_position_bounds_single_vertex() {
        let (min, max) = position_bounds(&[[2.5, -1.0, 0.25]]);
        assert_eq!(min, max);
        assert_eq!(min, [2.5, -1.0, 0.25]);
    }

    #[test]
    fn test_align_to_4() {
        assert_eq!(align_to_4(0), 0);
        assert_eq!(align_to_4(1), 4);
        assert_eq!(align_to_4(6), 8);
        assert_eq!(align_to_4(8), 8);
    }
}
