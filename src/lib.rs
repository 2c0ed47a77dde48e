//! Triangle mesh decimation with quadric error metrics.
//!
//! Edges are contracted greedily, cheapest first, until the mesh reaches a
//! target triangle count or a collapse/time budget runs out. An optional
//! per-triangle UV triplet is carried along with surviving triangles.

pub type F = f64;

pub mod quadric;
pub mod sym;

mod vec;
use vec::*;

mod candidate;
mod compact;
mod faces;
mod manifold;

mod error;
pub use error::{Error, Result};

mod mesh;
pub use mesh::TriMesh;

mod parameters;
pub use parameters::{Args, Budget, DEFAULT_PROGRESS_INTERVAL, Params};

mod progress;
pub use progress::Progress;

mod report;
pub use report::{Report, StopReason};

mod qem;
pub use qem::{estimate, simplify, simplify_with_progress};
