use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

use super::F;
use super::manifold::CollapsibleManifold;
use super::quadric::Quadric;

/// Cost and target position of contracting one edge.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub cost: OrderedFloat<F>,
    pub pos: [F; 3],
    /// Insertion order, breaks cost ties.
    seq: u64,
}

impl Candidate {
    /// Merges the endpoint quadrics and places the contracted vertex where the merged
    /// quadric is smallest, or at the midpoint if that is ill-conditioned.
    pub fn evaluate((q0, p0): &(Quadric, [F; 3]), (q1, p1): &(Quadric, [F; 3])) -> (F, [F; 3]) {
        let q = *q0 + *q1;
        let pos = q.point(*p0, *p1);
        (q.cost(pos), pos)
    }
}

// Cheaper candidates compare greater, so they pop first from the max-queue.
impl Ord for Candidate {
    fn cmp(&self, o: &Self) -> Ordering {
        o.cost.cmp(&self.cost).then_with(|| o.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, o: &Self) -> Option<Ordering> {
        Some(self.cmp(o))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, o: &Self) -> bool {
        self.cmp(o) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Edge candidates keyed by `[lower, higher]` vertex.
///
/// Pushing an edge that is already queued replaces its entry. Entries are not removed
/// when an endpoint dies, so popped edges must be checked against the current mesh.
#[derive(Debug)]
pub struct CandidateQueue {
    pq: PriorityQueue<[usize; 2], Candidate>,
    next_seq: u64,
}

impl CandidateQueue {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            pq: PriorityQueue::with_capacity(cap),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, e0: usize, e1: usize, cost: F, pos: [F; 3]) {
        let e = if e0 < e1 { [e0, e1] } else { [e1, e0] };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pq.push(
            e,
            Candidate {
                cost: OrderedFloat(cost),
                pos,
                seq,
            },
        );
    }

    /// Recomputes and queues the edge `e0`-`e1`, if the two are adjacent.
    pub fn refresh(&mut self, m: &CollapsibleManifold<(Quadric, [F; 3])>, e0: usize, e1: usize) {
        if e0 == e1 || !m.is_adj(e0, e1) {
            return;
        }
        let (cost, pos) = Candidate::evaluate(m.get(e0), m.get(e1));
        self.push(e0, e1, cost, pos);
    }

    /// Removes the cheapest candidate.
    pub fn pop(&mut self) -> Option<([usize; 2], Candidate)> {
        self.pq.pop()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_cheapest_first() {
        let mut q = CandidateQueue::with_capacity(4);
        q.push(0, 1, 3., [0.; 3]);
        q.push(2, 1, 1., [1.; 3]);
        q.push(0, 2, 2., [2.; 3]);
        assert_eq!(q.len(), 3);

        let (e, c) = q.pop().unwrap();
        assert_eq!(e, [1, 2]);
        assert_eq!(c.cost, OrderedFloat(1.));
        assert_eq!(c.pos, [1.; 3]);
        assert_eq!(q.pop().unwrap().0, [0, 2]);
        assert_eq!(q.pop().unwrap().0, [0, 1]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut q = CandidateQueue::with_capacity(4);
        for (i, e) in [[3, 4], [0, 1], [2, 3], [1, 2]].into_iter().enumerate() {
            q.push(e[0], e[1], 0., [i as F; 3]);
        }
        let order = std::iter::from_fn(|| q.pop().map(|(e, _)| e)).collect::<Vec<_>>();
        assert_eq!(order, vec![[3, 4], [0, 1], [2, 3], [1, 2]]);
    }

    #[test]
    fn test_repush_replaces_entry() {
        let mut q = CandidateQueue::with_capacity(2);
        q.push(0, 1, 0.5, [0.; 3]);
        q.push(1, 0, 4., [9.; 3]);
        q.push(1, 2, 1., [1.; 3]);
        assert_eq!(q.len(), 2);

        assert_eq!(q.pop().unwrap().0, [1, 2]);
        let (e, c) = q.pop().unwrap();
        assert_eq!(e, [0, 1]);
        assert_eq!(c.pos, [9.; 3]);
    }

    #[test]
    fn test_refresh_requires_adjacency() {
        let mut m = CollapsibleManifold::new_with(3, |vi| (Quadric::default(), [vi as F, 0., 0.]));
        m.add_edge(0, 1);
        let mut q = CandidateQueue::with_capacity(2);
        q.refresh(&m, 0, 2);
        q.refresh(&m, 1, 1);
        assert!(q.is_empty());

        q.refresh(&m, 1, 0);
        let (e, c) = q.pop().unwrap();
        assert_eq!(e, [0, 1]);
        // a zero quadric is singular, so the midpoint is used
        assert_eq!(c.pos, [0.5, 0., 0.]);
        assert_eq!(c.cost, OrderedFloat(0.));
    }
}
