use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::normals::{calculate_normals, NormalsError};

/// CPU-side buffers ready to hand to a vertex-attribute uploader.
///
/// `vertices` holds flattened (x, y, z) position triples; `normals`, when
/// present, mirrors that layout one unit vector per vertex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshBuffers {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normals: Option<Vec<f32>>,
}

impl MeshBuffers {
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            normals: None,
        }
    }

    /// Number of (x, y, z) triples in the vertex buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of whole index triples in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Computes smooth vertex normals and stores them alongside the mesh.
    pub fn compute_normals(&mut self) -> Result<(), NormalsError> {
        self.normals = Some(calculate_normals(&self.vertices, &self.indices)?);
        Ok(())
    }

    /// Parses the JSON interchange form produced by [`MeshBuffers::to_json`].
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).context("invalid mesh JSON")
    }

    /// Serializes the mesh to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize mesh")
    }
}
