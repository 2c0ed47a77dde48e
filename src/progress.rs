use std::fmt;
use std::time::Duration;

use super::F;

/// Snapshot handed to the progress callback every few collapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub collapses: usize,
    /// Live triangles right now.
    pub live_tris: usize,
    pub target_tris: usize,
    /// Triangles in the input mesh.
    pub initial_tris: usize,
    pub elapsed: Duration,
}

impl Progress {
    /// Share of the needed triangle reduction done so far, in `[0, 1]`.
    pub fn fraction(&self) -> F {
        let need = self.initial_tris.saturating_sub(self.target_tris).max(1);
        let done = self.initial_tris.saturating_sub(self.live_tris);
        (done as F / need as F).clamp(0., 1.)
    }

    /// Linear extrapolation of the remaining time.
    pub fn eta(&self) -> Option<Duration> {
        let frac = self.fraction();
        if frac <= 0. {
            return None;
        }
        Duration::try_from_secs_f64(self.elapsed.as_secs_f64() * (1. - frac) / frac).ok()
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "collapsed={} faces_now={} target={} ({:.1}%)",
            self.collapses,
            self.live_tris,
            self.target_tris,
            self.fraction() * 100.
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(live_tris: usize) -> Progress {
        Progress {
            collapses: 10,
            live_tris,
            target_tris: 60,
            initial_tris: 100,
            elapsed: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_fraction() {
        assert_eq!(progress(100).fraction(), 0.);
        assert_eq!(progress(80).fraction(), 0.5);
        assert_eq!(progress(50).fraction(), 1.);
    }

    #[test]
    fn test_eta() {
        assert_eq!(progress(100).eta(), None);
        assert_eq!(progress(80).eta(), Some(Duration::from_secs(2)));
        assert_eq!(progress(60).eta(), Some(Duration::ZERO));
    }

    #[test]
    fn test_display() {
        let s = progress(80).to_string();
        assert_eq!(s, "collapsed=10 faces_now=80 target=60 (50.0%)");
    }
}
