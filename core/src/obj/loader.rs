//! Line-oriented OBJ parser.

use std::io::BufRead;

use crate::error::ConvertError;
use crate::mesh::TriangleMesh;

/// Parse OBJ text from a reader into a [`TriangleMesh`].
///
/// Face indices are normalized to 0-based at parse time. Negative indices
/// resolve relative to the vertices declared so far, per OBJ convention.
///
/// Fails with [`ConvertError::Parse`] on a malformed vertex or face record,
/// [`ConvertError::IndexOutOfRange`] on a vertex reference that cannot
/// resolve, [`ConvertError::EmptyMesh`] if the source has no vertices or no
/// faces, and [`ConvertError::Io`] if the reader fails.
pub fn parse_obj(reader: impl BufRead) -> Result<TriangleMesh, ConvertError> {
    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();
    let mut skipped = 0usize;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_index + 1;

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => vertices.push(parse_vertex(tokens, line_no)?),
            Some("f") => parse_face(tokens, line_no, vertices.len(), &mut faces)?,
            Some(_) => skipped += 1,
            None => {}
        }
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} non-geometry OBJ records");
    }

    TriangleMesh::new(vertices, faces)
}

/// Parse OBJ text from an in-memory string.
pub fn parse_obj_str(source: &str) -> Result<TriangleMesh, ConvertError> {
    parse_obj(source.as_bytes())
}

fn parse_vertex<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<[f32; 3], ConvertError> {
    let mut position = [0.0f32; 3];
    let mut count = 0;

    // First three components are the position; w and vertex colors are ignored.
    for token in tokens {
        if count == 3 {
            break;
        }
        position[count] = token.parse::<f32>().map_err(|_| ConvertError::Parse {
            line: line_no,
            message: format!("invalid vertex component '{token}'"),
        })?;
        count += 1;
    }

    if count < 3 {
        return Err(ConvertError::Parse {
            line: line_no,
            message: format!("vertex record has {count} components, expected 3"),
        });
    }

    Ok(position)
}

fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
    declared_vertices: usize,
    faces: &mut Vec<[u32; 3]>,
) -> Result<(), ConvertError> {
    let mut refs: Vec<u32> = Vec::new();
    for token in tokens {
        refs.push(parse_face_ref(
            token,
            line_no,
            declared_vertices,
            faces.len(),
        )?);
    }

    if refs.len() < 3 {
        return Err(ConvertError::Parse {
            line: line_no,
            message: format!("face record has {} vertex references, expected 3", refs.len()),
        });
    }

    // Fan-triangulate n-gons around the first vertex.
    for i in 1..refs.len() - 1 {
        faces.push([refs[0], refs[i], refs[i + 1]]);
    }

    Ok(())
}

/// Resolve one `v`, `v/vt`, `v//vn`, or `v/vt/vn` face token to a 0-based
/// vertex index.
///
/// Positive indices are range-checked later against the final vertex count
/// (by [`TriangleMesh::new`]); negative indices must resolve against the
/// vertices declared so far.
fn parse_face_ref(
    token: &str,
    line_no: usize,
    declared_vertices: usize,
    face: usize,
) -> Result<u32, ConvertError> {
    let vertex_field = token.split('/').next().unwrap_or("");
    let raw: i64 = vertex_field.parse().map_err(|_| ConvertError::Parse {
        line: line_no,
        message: format!("invalid face reference '{token}'"),
    })?;

    let resolved = if raw > 0 {
        raw - 1
    } else {
        // Zero is never a valid OBJ index; negatives count back from the
        // most recently declared vertex.
        declared_vertices as i64 + raw
    };

    if raw == 0 || resolved < 0 || resolved > u32::MAX as i64 {
        return Err(ConvertError::IndexOutOfRange {
            face,
            index: resolved,
            vertex_count: declared_vertices,
        });
    }

    Ok(resolved as u32)
}
