use crate::gltf::{export_glb, GlbOptions};
use crate::mesh::TriangleMesh;


/// Unit right triangle in the XY plane.
fn triangle_mesh() -> TriangleMesh {
    TriangleMesh::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0, 1, 2]],
    )
    .unwrap()
}

fn export_triangle() -> Vec<u8> {
    export_glb(&triangle_mesh(), &GlbOptions::default()).unwrap()
}

/// Read the JSON and BIN chunk payload lengths from a GLB byte stream.
fn chunk_lengths(glb: &[u8]) -> (usize, usize) {
    let json_len = u32::from_le_bytes(glb[12..16].try_into().unwrap()) as usize;
    let bin_header = 12 + 8 + json_len;
    let bin_len = u32::from_le_bytes(glb[bin_header..bin_header + 4].try_into().unwrap()) as usize;
    (json_len, bin_len)
}

/// Extract an accessor's min or max as f64 components.
fn bounds_components(value: gltf_dep::json::Value) -> Vec<f64> {
    value
        .as_array()
        .expect("bounds should be a JSON array")
        .iter()
        .map(|v| v.as_f64().expect("bounds component should be a number"))
        .collect()
}
