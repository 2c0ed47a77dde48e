use smallvec::SmallVec;

/// Triangles under contraction: index triples rewritten in place, liveness flags,
/// and the triangles incident to each vertex.
#[derive(Debug, Clone)]
pub struct FaceSet {
    pub f: Vec<[usize; 3]>,
    alive: Vec<bool>,
    /// Incident triangles per vertex. May list dead triangles; they are skipped lazily.
    vert_faces: Vec<SmallVec<[usize; 8]>>,
    live: usize,
}

impl FaceSet {
    pub fn new(f: Vec<[usize; 3]>, num_verts: usize) -> Self {
        let mut vert_faces = vec![SmallVec::new(); num_verts];
        for (fi, t) in f.iter().enumerate() {
            for &vi in t {
                let fs: &mut SmallVec<[usize; 8]> = &mut vert_faces[vi];
                if fs.last() != Some(&fi) {
                    fs.push(fi);
                }
            }
        }
        Self {
            alive: vec![true; f.len()],
            live: f.len(),
            f,
            vert_faces,
        }
    }

    /// Number of live triangles.
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    #[cfg(test)]
    pub fn is_alive(&self, fi: usize) -> bool {
        self.alive[fi]
    }

    pub fn kill(&mut self, fi: usize) {
        if std::mem::replace(&mut self.alive[fi], false) {
            self.live -= 1;
        }
    }

    /// Rewrites every live triangle referencing `src` to reference `dst` instead.
    /// Triangles left with a repeated index are killed. Returns how many died.
    pub fn collapse(&mut self, src: usize, dst: usize) -> usize {
        let prev = self.live;
        for fi in std::mem::take(&mut self.vert_faces[src]) {
            if !self.alive[fi] {
                continue;
            }
            let t = &mut self.f[fi];
            for vi in t.iter_mut() {
                if *vi == src {
                    *vi = dst;
                }
            }
            let [a, b, c] = *t;
            if a == b || b == c || a == c {
                self.kill(fi);
            } else {
                self.vert_faces[dst].push(fi);
            }
        }
        let alive = &self.alive;
        self.vert_faces[dst].retain(|fi| alive[*fi]);
        prev - self.live
    }

    /// Live triangles with their original slot.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, [usize; 3])> + '_ {
        self.f
            .iter()
            .enumerate()
            .filter(|&(fi, _)| self.alive[fi])
            .map(|(fi, &t)| (fi, t))
    }
}
