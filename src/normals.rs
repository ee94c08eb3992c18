use glam::Vec3;
use thiserror::Error;

/// Describes how a position/index buffer pair failed validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NormalsError {
    /// The position buffer does not divide into whole (x, y, z) triples.
    #[error("positions length {0} is not a multiple of 3")]
    TruncatedPositions(usize),
    /// The index buffer does not divide into whole triangles.
    #[error("indices length {0} is not a multiple of 3")]
    TruncatedIndices(usize),
    /// An index referenced a vertex beyond the end of the position buffer.
    #[error("index {index} is out of range for a mesh of {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Computes one smooth normal per vertex of a triangle list.
///
/// `positions` holds flattened (x, y, z) triples and `indices` names one
/// triangle per consecutive triple of vertex indices; strips and fans are
/// not understood. Face normals are accumulated unnormalized, so a larger
/// triangle pulls the normals of its shared vertices proportionally harder,
/// and each per-vertex sum is unit-normalized at the end. The returned
/// buffer has the same length and layout as `positions`.
///
/// Vertices referenced by no triangle (or only by triangles whose
/// contributions cancel) come out as `(0, 0, 0)` rather than NaN.
pub fn calculate_normals(positions: &[f32], indices: &[u32]) -> Result<Vec<f32>, NormalsError> {
    if positions.len() % 3 != 0 {
        return Err(NormalsError::TruncatedPositions(positions.len()));
    }
    if indices.len() % 3 != 0 {
        return Err(NormalsError::TruncatedIndices(indices.len()));
    }
    let vertex_count = positions.len() / 3;
    if let Some(&index) = indices.iter().find(|&&index| index as usize >= vertex_count) {
        return Err(NormalsError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }

    let mut accum = vec![Vec3::ZERO; vertex_count];

    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;
        let p0 = Vec3::from_slice(&positions[3 * i0..3 * i0 + 3]);
        let p1 = Vec3::from_slice(&positions[3 * i1..3 * i1 + 3]);
        let p2 = Vec3::from_slice(&positions[3 * i2..3 * i2 + 3]);

        // Both edges pivot on p1, which fixes the winding convention.
        let face = (p2 - p1).cross(p0 - p1);
        accum[i0] += face;
        accum[i1] += face;
        accum[i2] += face;
    }

    let mut normals = Vec::with_capacity(positions.len());
    for sum in accum {
        let len = sum.length();
        // An untouched vertex keeps its zero normal instead of dividing by zero.
        let normal = if len == 0.0 { sum } else { sum / len };
        normals.extend_from_slice(&normal.to_array());
    }

    Ok(normals)
}
