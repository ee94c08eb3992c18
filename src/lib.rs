//! Geometry and shading math helpers for WebGL-style renderers.
//!
//! The crate exposes the building blocks a renderer needs before the first
//! draw call: per-vertex normal computation, reference geometry, transform
//! matrices and color conversions.  Anything that talks to a live graphics
//! context is the caller's job; this crate only prepares the buffers those
//! calls consume, so it runs headless and tests without a GPU.

pub mod color;
pub mod geometry;
pub mod mesh;
pub mod normals;
pub mod transforms;

pub use color::{denormalize_color, hex_to_rgb, normalize_color, rgb_to_hex};
pub use geometry::{Axis, Cone, Floor};
pub use mesh::MeshBuffers;
pub use normals::{calculate_normals, NormalsError};
pub use transforms::{
    axis_rotation_matrix, ortho_matrix, perspective_matrix, rotation_matrix, scale_matrix,
    translation_matrix, RotationAxis,
};
