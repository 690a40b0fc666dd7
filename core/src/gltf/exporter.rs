//! glTF 2.0 exporter.
//!
//! Builds the JSON document describing a packed [`TriangleMesh`] buffer and
//! assembles the final binary glTF (`.glb`) byte stream.

use std::collections::BTreeMap;

use gltf_dep::json as gj;

use crate::error::ConvertError;
use crate::mesh::{IndexFormat, TriangleMesh};

use super::buffer::{align_to_4, position_bounds, BlockRange, PackedBuffer};

// Fixed document shape: one buffer, two views, two accessors.
const POSITION_ACCESSOR: u32 = 0;
const INDEX_ACCESSOR: u32 = 1;

pub(super) struct ExportContext {
    root: gj::Root,
    buffer: PackedBuffer,
}

impl ExportContext {
    pub(super) fn new(buffer: PackedBuffer) -> Self {
        Self {
            root: gj::Root::default(),
            buffer,
        }
    }

    // -- Step 1: Buffer and buffer views -------------------------------------

    pub(super) fn build_buffer_views(&mut self) {
        self.root.buffers.push(gj::Buffer {
            byte_length: gj::validation::USize64(self.buffer.data().len() as u64),
            name: None,
            uri: None,
            extensions: None,
            extras: gj::Extras::default(),
        });

        self.push_buffer_view(
            self.buffer.vertex_block(),
            gj::buffer::Target::ArrayBuffer,
        );
        self.push_buffer_view(
            self.buffer.index_block(),
            gj::buffer::Target::ElementArrayBuffer,
        );
    }

    fn push_buffer_view(&mut self, block: BlockRange, target: gj::buffer::Target) -> u32 {
        let view_idx = self.root.buffer_views.len() as u32;
        self.root.buffer_views.push(gj::buffer::View {
            buffer: gj::Index::new(0),
            byte_offset: Some(gj::validation::USize64(block.byte_offset as u64)),
            byte_length: gj::validation::USize64(block.byte_length as u64),
            byte_stride: None,
            target: Some(gj::validation::Checked::Valid(target)),
            name: None,
            extensions: None,
            extras: gj::Extras::default(),
        });
        view_idx
    }

    // -- Step 2: Accessors ----------------------------------------------------

    pub(super) fn build_accessors(&mut self, mesh: &TriangleMesh) {
        let (min, max) = position_bounds(mesh.vertices());
        self.push_accessor(
            0,
            mesh.vertex_count() as u32,
            gj::accessor::ComponentType::F32,
            gj::accessor::Type::Vec3,
            Some(json_f32_array(&min)),
            Some(json_f32_array(&max)),
        );

        let component_type = match self.buffer.index_format() {
            IndexFormat::Uint16 => gj::accessor::ComponentType::U16,
            IndexFormat::Uint32 => gj::accessor::ComponentType::U32,
        };
        self.push_accessor(
            1,
            mesh.index_count() as u32,
            component_type,
            gj::accessor::Type::Scalar,
            None,
            None,
        );
    }

    fn push_accessor(
        &mut self,
        buffer_view: u32,
        count: u32,
        component_type: gj::accessor::ComponentType,
        type_: gj::accessor::Type,
        min: Option<gj::Value>,
        max: Option<gj::Value>,
    ) -> u32 {
        let acc_idx = self.root.accessors.len() as u32;
        self.root.accessors.push(gj::Accessor {
            buffer_view: Some(gj::Index::new(buffer_view)),
            byte_offset: Some(gj::validation::USize64(0)),
            count: gj::validation::USize64(count as u64),
            component_type: gj::validation::Checked::Valid(gj::accessor::GenericComponentType(
                component_type,
            )),
            type_: gj::validation::Checked::Valid(type_),
            min,
            max,
            normalized: false,
            name: None,
            sparse: None,
            extensions: None,
            extras: gj::Extras::default(),
        });
        acc_idx
    }

    // -- Step 3: Mesh, node, scene --------------------------------------------

    pub(super) fn build_mesh(&mut self, label: Option<&str>) {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            gj::validation::Checked::Valid(gj::mesh::Semantic::Positions),
            gj::Index::new(POSITION_ACCESSOR),
        );

        let primitive = gj::mesh::Primitive {
            attributes,
            extensions: None,
            extras: gj::Extras::default(),
            indices: Some(gj::Index::new(INDEX_ACCESSOR)),
            material: None,
            mode: gj::validation::Checked::Valid(gj::mesh::Mode::Triangles),
            targets: None,
        };

        self.root.meshes.push(gj::Mesh {
            name: label.map(String::from),
            primitives: vec![primitive],
            weights: None,
            extensions: None,
            extras: gj::Extras::default(),
        });
    }

    pub(super) fn build_scene(&mut self) {
        self.root.nodes.push(gj::Node {
            name: None,
            camera: None,
            children: None,
            mesh: Some(gj::Index::new(0)),
            skin: None,
            translation: None,
            rotation: None,
            scale: None,
            matrix: None,
            weights: None,
            extensions: None,
            extras: gj::Extras::default(),
        });

        self.root.scenes.push(gj::Scene {
            name: None,
            nodes: vec![gj::Index::new(0)],
            extensions: None,
            extras: gj::Extras::default(),
        });

        self.root.scene = Some(gj::Index::new(0));
        self.root.asset = gj::Asset {
            generator: Some("Meshport".into()),
            version: "2.0".into(),
            ..Default::default()
        };
    }

    // -- GLB assembly ----------------------------------------------------------

    pub(super) fn to_glb(&self) -> Result<Vec<u8>, ConvertError> {
        let json_bytes = self
            .root
            .to_vec()
            .map_err(|e| ConvertError::Serialize(e.to_string()))?;

        let json_chunk_len = align_to_4(json_bytes.len());
        let bin_chunk_len = align_to_4(self.buffer.data().len());
        let total_length = 12 + 8 + json_chunk_len + 8 + bin_chunk_len;

        let mut glb = Vec::with_capacity(total_length);

        // Header
        glb.extend_from_slice(&0x46546C67u32.to_le_bytes()); // magic "glTF"
        glb.extend_from_slice(&2u32.to_le_bytes()); // version
        glb.extend_from_slice(&(total_length as u32).to_le_bytes());

        // JSON chunk, space-padded
        glb.extend_from_slice(&(json_chunk_len as u32).to_le_bytes());
        glb.extend_from_slice(&0x4E4F534Au32.to_le_bytes()); // "JSON"
        glb.extend_from_slice(&json_bytes);
        glb.extend(std::iter::repeat_n(b' ', json_chunk_len - json_bytes.len()));

        // BIN chunk, zero-padded
        glb.extend_from_slice(&(bin_chunk_len as u32).to_le_bytes());
        glb.extend_from_slice(&0x004E4942u32.to_le_bytes()); // "BIN\0"
        glb.extend_from_slice(self.buffer.data());
        glb.extend(std::iter::repeat_n(
            0u8,
            bin_chunk_len - self.buffer.data().len(),
        ));

        Ok(glb)
    }
}

/// Build a JSON array of f32 values (for accessor min/max).
fn json_f32_array(values: &[f32]) -> gj::Value {
    gj::Value::Array(values.iter().map(|&v| gj::Value::from(v as f64)).collect())
}
