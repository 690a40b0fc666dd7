//! Error types for mesh conversion.

use std::fmt;

use crate::mesh::IndexFormat;

/// Errors that can occur while converting a mesh to GLB.
#[derive(Debug)]
pub enum ConvertError {
    /// A source line could not be decoded as a vertex or face record.
    Parse {
        /// 1-based line number in the source.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },
    /// The source produced no vertices or no faces.
    EmptyMesh,
    /// A face references a vertex that does not exist.
    IndexOutOfRange {
        /// 0-based face number.
        face: usize,
        /// The offending vertex reference, after normalization.
        index: i64,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
    /// An index value does not fit the requested index format.
    IndexRangeOverflow {
        /// The value that failed to encode.
        index: u32,
        /// The format it was forced into.
        format: IndexFormat,
    },
    /// The glTF document failed to serialize to JSON.
    Serialize(String),
    /// An IO error occurred reading the source or writing the container.
    Io(std::io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, message } => write!(f, "parse error at line {line}: {message}"),
            Self::EmptyMesh => write!(f, "mesh has no vertices or no faces"),
            Self::IndexOutOfRange {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {face} references vertex {index} but mesh has {vertex_count} vertices"
            ),
            Self::IndexRangeOverflow { index, format } => {
                write!(f, "index {index} does not fit {format:?}")
            }
            Self::Serialize(msg) => write!(f, "JSON serialization failed: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
