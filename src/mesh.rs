use super::F;
use super::error::{Error, Result};

/// A triangle mesh, with an optional face-varying UV channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    /// Vertex positions.
    pub v: Vec<[F; 3]>,
    /// Triangles, as indices into `v`.
    pub f: Vec<[usize; 3]>,
    /// `(u0, v0, u1, v1, u2, v2)` for each triangle in `f`, same order.
    pub uv: Option<Vec<[F; 6]>>,
}

impl TriMesh {
    pub fn new(v: Vec<[F; 3]>, f: Vec<[usize; 3]>) -> Self {
        Self { v, f, uv: None }
    }

    pub fn with_uvs(mut self, uv: Vec<[F; 6]>) -> Self {
        self.uv = Some(uv);
        self
    }

    /// Builds a mesh from arbitrary faces, refusing anything but triangles.
    pub fn from_polygons<'a>(
        v: Vec<[F; 3]>,
        faces: impl IntoIterator<Item = &'a [usize]>,
    ) -> Result<Self> {
        let f = faces
            .into_iter()
            .enumerate()
            .map(|(fi, face)| match *face {
                [a, b, c] => Ok([a, b, c]),
                _ => Err(Error::NonTriangularFace {
                    face: fi,
                    corners: face.len(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(v, f))
    }

    pub fn num_verts(&self) -> usize {
        self.v.len()
    }

    pub fn num_tris(&self) -> usize {
        self.f.len()
    }

    pub fn clear(&mut self) {
        self.v.clear();
        self.f.clear();
        self.uv = None;
    }

    /// Checks that the mesh can be decimated as is.
    pub fn validate(&self) -> Result<()> {
        if self.v.is_empty() {
            return Err(Error::NoVertices);
        }
        if self.f.is_empty() {
            return Err(Error::NoTriangles);
        }
        if u32::try_from(self.v.len()).is_err() {
            return Err(Error::TooManyVertices(self.v.len()));
        }
        if let Some(vertex) = self.v.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(Error::NonFinitePosition { vertex });
        }
        let num_verts = self.v.len();
        for (ti, t) in self.f.iter().enumerate() {
            if let Some(&index) = t.iter().find(|&&vi| vi >= num_verts) {
                return Err(Error::IndexOutOfRange {
                    triangle: ti,
                    index,
                    num_verts,
                });
            }
        }
        match &self.uv {
            Some(uv) if uv.len() != self.f.len() => Err(Error::UvLengthMismatch {
                uvs: uv.len(),
                tris: self.f.len(),
            }),
            _ => Ok(()),
        }
    }
}
