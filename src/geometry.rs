use std::f32::consts::TAU;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::mesh::MeshBuffers;

/// Line-list marker for the three world axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub dimension: f32,
    pub diffuse: Vec4,
    pub wireframe: bool,
    pub visible: bool,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Axis {
    pub fn new(dimension: f32) -> Self {
        let mut axis = Self {
            dimension,
            diffuse: Vec4::ONE,
            wireframe: true,
            visible: true,
            vertices: Vec::new(),
            indices: vec![0, 1, 2, 3, 4, 5],
        };
        axis.build(dimension);
        axis
    }

    /// Rebuilds the vertex table for a new extent.
    pub fn build(&mut self, dimension: f32) {
        self.dimension = dimension;
        let d = dimension;
        // The vertical arm spans half the extent of the ground arms.
        self.vertices = vec![
            -d, 0.0, 0.0, //
            d, 0.0, 0.0, //
            0.0, -d / 2.0, 0.0, //
            0.0, d / 2.0, 0.0, //
            0.0, 0.0, -d, //
            0.0, 0.0, d,
        ];
    }

    pub fn set_diffuse(&mut self, diffuse: Vec4) {
        self.diffuse = diffuse;
    }

    pub fn alias(&self) -> &'static str {
        "axis"
    }

    /// Snapshot of the buffers in interchange form.
    pub fn buffers(&self) -> MeshBuffers {
        MeshBuffers::new(self.vertices.clone(), self.indices.clone())
    }
}

/// Line-list grid on the Y=0 plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub dimension: f32,
    /// Segment count per direction, derived from the requested spacing.
    pub lines: u32,
    pub diffuse: Vec4,
    pub wireframe: bool,
    pub visible: bool,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Default for Floor {
    fn default() -> Self {
        Self::new(50.0, 5.0)
    }
}

impl Floor {
    /// Grid covering `[-dimension, dimension]` on X and Z with a line every
    /// `spacing` units.
    pub fn new(dimension: f32, spacing: f32) -> Self {
        let mut floor = Self {
            dimension,
            lines: 0,
            diffuse: Vec4::ONE,
            wireframe: true,
            visible: true,
            vertices: Vec::new(),
            indices: Vec::new(),
        };
        floor.build(dimension, spacing);
        floor
    }

    /// Rebuilds the grid for a new extent and spacing.
    pub fn build(&mut self, dimension: f32, spacing: f32) {
        self.dimension = dimension;
        self.lines = if spacing > 0.0 {
            (2.0 * dimension / spacing) as u32
        } else {
            0
        };
        let inc = if self.lines == 0 {
            0.0
        } else {
            2.0 * dimension / self.lines as f32
        };

        let mut vertices = Vec::with_capacity(12 * (self.lines as usize + 1));
        // Lines parallel to X first, then lines parallel to Z.
        for l in 0..=self.lines {
            let offset = -dimension + l as f32 * inc;
            vertices.extend_from_slice(&[-dimension, 0.0, offset, dimension, 0.0, offset]);
        }
        for l in 0..=self.lines {
            let offset = -dimension + l as f32 * inc;
            vertices.extend_from_slice(&[offset, 0.0, -dimension, offset, 0.0, dimension]);
        }

        self.indices = (0..vertices.len() as u32 / 3).collect();
        self.vertices = vertices;
    }

    pub fn set_diffuse(&mut self, diffuse: Vec4) {
        self.diffuse = diffuse;
    }

    pub fn alias(&self) -> &'static str {
        "floor"
    }

    /// Snapshot of the buffers in interchange form.
    pub fn buffers(&self) -> MeshBuffers {
        MeshBuffers::new(self.vertices.clone(), self.indices.clone())
    }
}

/// Triangle fan approximating a cone, apex up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
    pub diffuse: Vec4,
    pub wireframe: bool,
    pub visible: bool,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Default for Cone {
    fn default() -> Self {
        Self::new(3.0, 6.0, 17)
    }
}

impl Cone {
    pub fn new(radius: f32, height: f32, segments: u32) -> Self {
        let mut cone = Self {
            radius,
            height,
            segments,
            diffuse: Vec4::new(1.0, 0.664, 0.0, 1.0),
            wireframe: true,
            visible: true,
            vertices: Vec::new(),
            indices: Vec::new(),
        };
        cone.build(radius, height, segments);
        cone
    }

    /// Rebuilds the fan for new proportions.
    pub fn build(&mut self, radius: f32, height: f32, segments: u32) {
        self.radius = radius;
        self.height = height;
        self.segments = segments;
        let step = if segments == 0 {
            0.0
        } else {
            TAU / segments as f32
        };

        let mut vertices = Vec::with_capacity(3 * (segments as usize + 2));
        vertices.extend_from_slice(&[0.0, height, 0.0]);
        // Rim points sweep clockwise when seen from above; the seam vertex
        // appears twice so every fan triangle is an independent triple.
        for s in 0..=segments {
            let theta = s as f32 * step;
            vertices.extend_from_slice(&[radius * theta.cos(), 0.0, -radius * theta.sin()]);
        }

        let mut indices = Vec::with_capacity(3 * segments as usize);
        for s in 1..=segments {
            indices.extend_from_slice(&[0, s, s + 1]);
        }

        self.vertices = vertices;
        self.indices = indices;
    }

    pub fn set_diffuse(&mut self, diffuse: Vec4) {
        self.diffuse = diffuse;
    }

    pub fn alias(&self) -> &'static str {
        "cone"
    }

    /// Snapshot of the buffers in interchange form.
    pub fn buffers(&self) -> MeshBuffers {
        MeshBuffers::new(self.vertices.clone(), self.indices.clone())
    }
}
