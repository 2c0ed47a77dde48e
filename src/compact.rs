use super::F;
use super::faces::FaceSet;
use super::manifold::CollapsibleManifold;
use super::mesh::TriMesh;
use super::quadric::Quadric;

/// Drops dead vertices and triangles, reindexing what is left densely.
/// Triangle `k` of the output and UV triplet `k` come from the same input slot.
pub fn compact(
    m: &CollapsibleManifold<(Quadric, [F; 3])>,
    faces: &FaceSet,
    uv: Option<&[[F; 6]]>,
) -> TriMesh {
    let mut remap = vec![None; m.num_verts()];
    let mut v = Vec::with_capacity(m.num_verts());
    for (vi, &(_, p)) in m.vertices() {
        remap[vi] = Some(v.len());
        v.push(p);
    }

    let mut f = Vec::with_capacity(faces.live());
    let mut out_uv = uv.map(|_| Vec::with_capacity(faces.live()));
    for (fi, t) in faces.iter_live() {
        let [Some(a), Some(b), Some(c)] = t.map(|vi| remap[vi]) else {
            continue;
        };
        f.push([a, b, c]);
        if let (Some(out), Some(uv)) = (out_uv.as_mut(), uv) {
            out.push(uv[fi]);
        }
    }

    TriMesh { v, f, uv: out_uv }
}
