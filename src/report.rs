use std::fmt;

use super::F;

/// Why a run stopped collapsing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Live triangles reached the target.
    TargetReached,
    /// No collapsible edge is left.
    QueueExhausted,
    /// The collapse cap was hit first.
    CollapseCap,
    /// The wall clock budget ran out.
    TimeLimit,
    /// The progress callback asked to stop.
    Cancelled,
    /// Nothing was collapsed, the counts are an estimate.
    DryRun,
}

/// Before/after counters of one decimation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub faces_before: usize,
    pub faces_after: usize,
    pub verts_before: usize,
    pub verts_after: usize,
    /// Requested triangle count.
    pub target: usize,
    pub collapses: usize,
    pub stop: StopReason,
}

impl Report {
    /// Output/input triangle ratio.
    pub fn reduction_ratio(&self) -> F {
        if self.faces_before == 0 {
            1.
        } else {
            self.faces_after as F / self.faces_before as F
        }
    }

    pub fn was_decimated(&self) -> bool {
        self.collapses > 0
    }

    /// Whether a budget or a cancellation ended the run before the target was reached.
    pub fn is_partial(&self) -> bool {
        matches!(
            self.stop,
            StopReason::CollapseCap | StopReason::TimeLimit | StopReason::Cancelled
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "faces: {} -> {}", self.faces_before, self.faces_after)?;
        write!(f, "verts: {} -> {}", self.verts_before, self.verts_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(stop: StopReason) -> Report {
        Report {
            faces_before: 1000,
            faces_after: 500,
            verts_before: 502,
            verts_after: 252,
            target: 500,
            collapses: 250,
            stop,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            report(StopReason::TargetReached).to_string(),
            "faces: 1000 -> 500\nverts: 502 -> 252"
        );
    }

    #[test]
    fn test_ratio_and_flags() {
        let r = report(StopReason::TargetReached);
        assert!((r.reduction_ratio() - 0.5).abs() < 1e-12);
        assert!(r.was_decimated());
        assert!(!r.is_partial());
        assert!(report(StopReason::TimeLimit).is_partial());
        assert!(report(StopReason::Cancelled).is_partial());
        assert!(!report(StopReason::QueueExhausted).is_partial());
    }
}
