//! One-call OBJ to GLB conversion.
//!
//! Ties the pipeline together: parse the OBJ source, export the mesh to a
//! GLB byte stream, write it to the sink. The container is fully assembled
//! in memory before any bytes reach the sink, so a failed write never leaves
//! a partially-authored container behind.

use std::io::{BufRead, Write};

use crate::error::ConvertError;
use crate::gltf::{export_glb, GlbOptions};
use crate::mesh::IndexFormat;
use crate::obj::parse_obj;

/// What a conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of vertices in the converted mesh.
    pub vertex_count: usize,
    /// Number of triangle faces in the converted mesh.
    pub face_count: usize,
    /// Index width the container was encoded with.
    pub index_format: IndexFormat,
    /// Total length of the GLB byte stream.
    pub glb_len: usize,
}

/// Convert OBJ text from `reader` into a GLB container written to `writer`.
///
/// Each call is an independent, synchronous pipeline over its own data;
/// concurrent conversions need no coordination.
pub fn obj_to_glb(
    reader: impl BufRead,
    mut writer: impl Write,
    options: &GlbOptions,
) -> Result<ConvertSummary, ConvertError> {
    let mesh = parse_obj(reader)?;
    let glb = export_glb(&mesh, options)?;
    writer.write_all(&glb)?;

    let summary = ConvertSummary {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        index_format: options.index_format.unwrap_or_else(|| mesh.index_format()),
        glb_len: glb.len(),
    };
    log::info!(
        "converted {} vertices / {} faces to {} GLB bytes",
        summary.vertex_count,
        summary.face_count,
        summary.glb_len
    );
    Ok(summary)
}

/// Convert OBJ text to an in-memory GLB byte stream.
pub fn obj_to_glb_bytes(source: &str, options: &GlbOptions) -> Result<Vec<u8>, ConvertError> {
    let mut glb = Vec::new();
    obj_to_glb(source.as_bytes(), &mut glb, options)?;
    Ok(glb)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;

    const TRIANGLE_OBJ: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_convert_summary() {
        init_logger();
        let mut sink = Vec::new();
        let summary =
            obj_to_glb(TRIANGLE_OBJ.as_bytes(), &mut sink, &GlbOptions::default()).unwrap();

        assert_eq!(summary.vertex_count, 3);
        assert_eq!(summary.face_count, 1);
        assert_eq!(summary.index_format, IndexFormat::Uint16);
        assert_eq!(summary.glb_len, sink.len());
    }

    #[test]
    fn test_convert_is_idempotent() {
        let a = obj_to_glb_bytes(TRIANGLE_OBJ, &GlbOptions::default()).unwrap();
        let b = obj_to_glb_bytes(TRIANGLE_OBJ, &GlbOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_convert_propagates_parse_errors() {
        let mut sink = Vec::new();
        let result = obj_to_glb("v 0 0\n".as_bytes(), &mut sink, &GlbOptions::default());
        assert!(matches!(result, Err(ConvertError::Parse { line: 1, .. })));
        assert!(sink.is_empty());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_convert_reports_sink_errors() {
        let result = obj_to_glb(TRIANGLE_OBJ.as_bytes(), FailingSink, &GlbOptions::default());
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }
}
