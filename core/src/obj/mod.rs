//! Wavefront OBJ loading.
//!
//! Parses the position/connectivity subset of the OBJ text format into a
//! [`TriangleMesh`](crate::mesh::TriangleMesh):
//!
//! - `v x y z` lines give vertex positions. Extra components (`w`, vertex
//!   colors) are ignored.
//! - `f a b c ...` lines give faces. Reference tokens may carry texture and
//!   normal indices (`v/vt`, `v//vn`, `v/vt/vn`); only the vertex index is
//!   used. Indices are 1-based, or negative and relative to the vertices
//!   declared so far. Faces with more than three references are
//!   fan-triangulated.
//! - All other line types (`vn`, `vt`, `o`, `g`, `s`, `usemtl`, `mtllib`,
//!   comments, blanks) are skipped.

mod loader;

pub use loader::{parse_obj, parse_obj_str};
