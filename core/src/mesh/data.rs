//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`IndexFormat`] - Index data format (u16 or u32)
//! - [`TriangleMesh`] - Validated vertex positions and triangle faces

use crate::error::ConvertError;

/// Index format for indexed drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65535 vertices).
    #[default]
    Uint16,
    /// 32-bit unsigned integers (max ~4 billion vertices).
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }

    /// Get the largest index value this format can encode.
    pub fn max_index(&self) -> u32 {
        match self {
            Self::Uint16 => u16::MAX as u32,
            Self::Uint32 => u32::MAX,
        }
    }
}

/// An immutable triangle mesh: vertex positions plus face index triples.
///
/// Invariants are checked once at construction and hold for the lifetime of
/// the value:
///
/// - at least one vertex and one face,
/// - every face index is within `0..vertex_count`.
///
/// Faces reference vertices with 0-based indices. Degenerate faces (repeated
/// indices) are valid data and pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<[f32; 3]>,
    faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a mesh from vertex positions and face index triples.
    ///
    /// Fails with [`ConvertError::EmptyMesh`] if either input is empty, or
    /// [`ConvertError::IndexOutOfRange`] if a face references a vertex that
    /// does not exist.
    pub fn new(vertices: Vec<[f32; 3]>, faces: Vec<[u32; 3]>) -> Result<Self, ConvertError> {
        if vertices.is_empty() || faces.is_empty() {
            return Err(ConvertError::EmptyMesh);
        }

        let vertex_count = vertices.len();
        for (face, indices) in faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertex_count {
                    return Err(ConvertError::IndexOutOfRange {
                        face,
                        index: index as i64,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Get the vertex positions.
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Get the face index triples.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of index values (`face_count * 3`).
    pub fn index_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Get the largest vertex index referenced by any face.
    pub fn max_index(&self) -> u32 {
        // Faces are non-empty per the construction invariant.
        self.faces
            .iter()
            .flat_map(|f| f.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Get the narrowest [`IndexFormat`] that can encode every face index.
    pub fn index_format(&self) -> IndexFormat {
        if self.max_index() <= u16::MAX as u32 {
            IndexFormat::Uint16
        } else {
            IndexFormat::Uint32
        }
    }
}
