//! Error types for decimation.

use thiserror::Error;

use super::F;

/// Reasons a mesh or a set of parameters is refused before decimation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Mesh has no vertices.
    #[error("mesh has no vertices")]
    NoVertices,

    /// Mesh has no triangles.
    #[error("mesh has no triangles")]
    NoTriangles,

    /// A face with a corner count other than three.
    #[error("face {face} has {corners} corners, only triangles are supported")]
    NonTriangularFace { face: usize, corners: usize },

    #[error("triangle {triangle} references vertex {index}, but the mesh has {num_verts} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: usize,
        num_verts: usize,
    },

    #[error("vertex {vertex} has a non-finite position")]
    NonFinitePosition { vertex: usize },

    /// The UV triplet array is not aligned 1:1 with the triangles.
    #[error("{uvs} uv triplets supplied for {tris} triangles")]
    UvLengthMismatch { uvs: usize, tris: usize },

    #[error("invalid triangle ratio {0} (must be in (0, 1])")]
    InvalidRatio(F),

    #[error("no target given, set a triangle count or a triangle ratio")]
    MissingTarget,

    #[error("mesh has {0} vertices, more than can be indexed")]
    TooManyVertices(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::NoTriangles.to_string(), "mesh has no triangles");

        let err = Error::IndexOutOfRange {
            triangle: 3,
            index: 12,
            num_verts: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("triangle 3"));
        assert!(msg.contains("vertex 12"));

        assert!(Error::InvalidRatio(1.5).to_string().contains("1.5"));
    }
}
