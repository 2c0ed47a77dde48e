use smallvec::SmallVec;

/// Sorted neighbour list of one vertex.
pub type Adjacency = SmallVec<[u32; 8]>;

/// A mesh representation which is suitable for collapsing vertices.
/// Vertices are integer handles; collapsed ones are flagged dead rather than removed,
/// and each vertex carries associated data.
#[derive(Debug, Clone)]
pub struct CollapsibleManifold<T> {
    alive: Vec<bool>,

    pub edges: Vec<Adjacency>,

    pub data: Vec<T>,
}

impl<T> CollapsibleManifold<T> {
    pub fn new_with(size: usize, f: impl Fn(usize) -> T) -> Self {
        Self {
            alive: vec![true; size],
            edges: vec![Adjacency::new(); size],
            data: (0..size).map(f).collect(),
        }
    }

    pub fn num_verts(&self) -> usize {
        self.alive.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        (0..self.num_verts())
            .filter(|&vi| !self.is_deleted(vi))
            .map(|vi| (vi, &self.data[vi]))
    }

    #[inline]
    pub fn is_deleted(&self, vi: usize) -> bool {
        !self.alive[vi]
    }

    /// Adds an undirected edge, ignoring self loops and duplicates.
    pub fn add_edge(&mut self, v0: usize, v1: usize) {
        if v0 == v1 {
            return;
        }
        sorted_insert(&mut self.edges[v0], v1 as u32);
        sorted_insert(&mut self.edges[v1], v0 as u32);
    }

    /// Returns adjacent vertices in ascending order.
    pub fn vertex_adj(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges[v].iter().map(|&dst| dst as usize)
    }

    /// Returns whether two vertices v0 and v1 are adjacent.
    #[inline]
    pub fn is_adj(&self, v0: usize, v1: usize) -> bool {
        self.edges[v0].binary_search(&(v1 as u32)).is_ok()
    }

    /// Merges `src` into `dst`. `dst` keeps its handle and receives the merged data,
    /// `src` is marked dead and its neighbours are handed over to `dst`.
    pub fn merge(&mut self, dst: usize, src: usize, merge: impl FnOnce(&T, &T) -> T) {
        debug_assert_ne!(src, dst);
        debug_assert!(!self.is_deleted(src));
        debug_assert!(!self.is_deleted(dst));
        debug_assert!(self.is_adj(src, dst));

        let new_data = merge(&self.data[dst], &self.data[src]);
        self.data[dst] = new_data;
        self.alive[src] = false;

        let src_e = std::mem::take(&mut self.edges[src]);
        sorted_remove(&mut self.edges[dst], src as u32);
        for w in src_e {
            if w as usize == dst {
                continue;
            }
            let adj_e = &mut self.edges[w as usize];
            sorted_remove(adj_e, src as u32);
            sorted_insert(adj_e, dst as u32);
            sorted_insert(&mut self.edges[dst], w);
        }
    }

    pub fn get(&self, v: usize) -> &T {
        &self.data[v]
    }

    /// All edges in this manifold mesh with v0-v1 in sorted order.
    pub fn ord_edges(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.edges.iter().enumerate().flat_map(|(src, dsts)| {
            dsts.iter()
                .filter(move |&&dst| src < dst as usize)
                .map(move |&dst| [src, dst as usize])
        })
    }
}

fn sorted_insert(adj: &mut Adjacency, v: u32) {
    if let Err(i) = adj.binary_search(&v) {
        adj.insert(i, v);
    }
}

fn sorted_remove(adj: &mut Adjacency, v: u32) {
    if let Ok(i) = adj.binary_search(&v) {
        adj.remove(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two triangles sharing the edge 1-2.
    fn quad() -> CollapsibleManifold<usize> {
        let mut m = CollapsibleManifold::new_with(4, |vi| vi * 10);
        for [a, b, c] in [[0, 1, 2], [1, 3, 2]] {
            m.add_edge(a, b);
            m.add_edge(b, c);
            m.add_edge(c, a);
        }
        m
    }

    #[test]
    fn test_add_edge_dedups() {
        let mut m = quad();
        m.add_edge(2, 1);
        m.add_edge(3, 3);
        assert_eq!(m.vertex_adj(1).collect::<Vec<_>>(), vec![0, 2, 3]);
        assert!(m.vertex_adj(3).all(|v| v != 3));
        assert_eq!(
            m.ord_edges().collect::<Vec<_>>(),
            vec![[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]]
        );
    }

    #[test]
    fn test_merge_rewires() {
        let mut m = quad();
        m.merge(1, 3, |&a, &b| a + b);
        assert!(m.is_deleted(3));
        assert!(!m.is_deleted(1));
        assert_eq!(*m.get(1), 40);

        // 3's other neighbour 2 now points at 1
        assert_eq!(m.vertex_adj(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(m.vertex_adj(2).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(m.vertex_adj(0).collect::<Vec<_>>(), vec![1, 2]);
        assert!(m.edges[3].is_empty());
        assert_eq!(m.vertices().map(|(vi, _)| vi).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_merge_drops_shared_edge() {
        let mut m = quad();
        m.merge(1, 2, |&a, _| a);
        assert!(!m.is_adj(1, 2));
        assert_eq!(m.vertex_adj(1).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(m.vertex_adj(0).collect::<Vec<_>>(), vec![1]);
    }
}
