pub use super::F;
use super::error::{Error, Result};

use clap::Parser;
use std::time::Duration;

/// Collapses between progress notifications, unless configured otherwise.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 20000;

/// Mesh geometry decimation.
#[derive(Parser, Default, Debug)]
#[clap(group(
            clap::ArgGroup::new("target")
                .required(true)
                .args(&["tri_ratio", "tri_number"]),
        ))]
pub struct Args {
    /// Input mesh file.
    #[arg(short, long, required = true)]
    pub input: String,

    /// Output mesh file.
    #[arg(short, long, required = true)]
    pub output: String,

    /// Ratio of output/input tris, in (0, 1].
    #[arg(short = 't', long, group = "target")]
    pub tri_ratio: Option<F>,

    /// Number of output tris.
    #[arg(short = 'T', long, group = "target")]
    pub tri_number: Option<usize>,

    /// Maximum number of edge collapses. Defaults to input tris minus target tris.
    #[arg(long)]
    pub max_collapses: Option<usize>,

    /// Time budget in seconds. Zero or negative disables it.
    #[arg(long)]
    pub time_limit: Option<F>,

    /// Number of collapses between progress reports.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: usize,

    /// Only report the expected face count, do not write any output.
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn params(&self) -> Params {
        Params {
            tri_ratio: self.tri_ratio,
            tri_number: self.tri_number,
            max_collapses: self.max_collapses,
            time_limit: self
                .time_limit
                .filter(|&s| s > 0.)
                .and_then(|s| Duration::try_from_secs_f64(s).ok()),
            progress_interval: self.progress_interval,
        }
    }
}

/// Budget and reporting settings for one decimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Ratio of output/input tris. Ignored if `tri_number` is set.
    pub tri_ratio: Option<F>,
    /// Number of output tris.
    pub tri_number: Option<usize>,
    /// Cap on the number of edge collapses.
    pub max_collapses: Option<usize>,
    /// Wall clock budget, checked once per collapse.
    pub time_limit: Option<Duration>,
    /// Collapses between progress notifications, 0 selects the default.
    pub progress_interval: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            tri_ratio: None,
            tri_number: None,
            max_collapses: None,
            time_limit: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Resolved stopping points of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub target: usize,
    pub max_collapses: usize,
}

impl Params {
    pub fn with_tri_number(n: usize) -> Self {
        Self {
            tri_number: Some(n),
            ..Default::default()
        }
    }

    pub fn with_tri_ratio(ratio: F) -> Self {
        Self {
            tri_ratio: Some(ratio),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn max_collapses(mut self, n: usize) -> Self {
        self.max_collapses = Some(n);
        self
    }

    #[must_use]
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn progress_interval(mut self, n: usize) -> Self {
        self.progress_interval = n;
        self
    }

    pub(crate) fn interval(&self) -> usize {
        if self.progress_interval == 0 {
            DEFAULT_PROGRESS_INTERVAL
        } else {
            self.progress_interval
        }
    }

    /// Target triangle count and collapse cap for a mesh with `num_tris` triangles.
    pub fn budget(&self, num_tris: usize) -> Result<Budget> {
        let target = match (self.tri_number, self.tri_ratio) {
            (Some(n), _) => n,
            (None, Some(r)) if !(r > 0. && r <= 1.) => return Err(Error::InvalidRatio(r)),
            (None, Some(r)) => (num_tris as F * r).floor() as usize,
            (None, None) => return Err(Error::MissingTarget),
        };
        let max_collapses = self
            .max_collapses
            .unwrap_or_else(|| num_tris.saturating_sub(target));
        Ok(Budget {
            target,
            max_collapses,
        })
    }
}
