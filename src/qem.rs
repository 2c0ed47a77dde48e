use std::ops::ControlFlow;
use std::time::Instant;

use log::{debug, info, warn};

use super::candidate::CandidateQueue;
use super::compact::compact;
use super::error::Result;
use super::faces::FaceSet;
use super::manifold::CollapsibleManifold;
use super::mesh::TriMesh;
use super::parameters::{Budget, Params};
use super::progress::Progress;
use super::quadric::Quadric;
use super::report::{Report, StopReason};

/// In-place simplification of a triangle mesh.
///
/// On success `mesh` is replaced by the decimated, densely indexed mesh. On error it is
/// left untouched.
pub fn simplify(mesh: &mut TriMesh, params: &Params) -> Result<Report> {
    simplify_with_progress(mesh, params, |_| ControlFlow::Continue(()))
}

/// [`simplify`], calling `progress` every `params.progress_interval` collapses.
/// Returning [`ControlFlow::Break`] stops the run and keeps what was collapsed so far.
pub fn simplify_with_progress(
    mesh: &mut TriMesh,
    params: &Params,
    mut progress: impl FnMut(&Progress) -> ControlFlow<()>,
) -> Result<Report> {
    mesh.validate()?;
    let start = Instant::now();
    let num_tris = mesh.num_tris();
    let num_verts = mesh.num_verts();
    let Budget {
        target,
        max_collapses,
    } = params.budget(num_tris)?;
    info!("simplifying {num_tris} faces -> target {target} (max collapses {max_collapses})");

    let v = &mesh.v;
    let mut m = CollapsibleManifold::new_with(num_verts, |vi| (Quadric::default(), v[vi]));
    let mut faces = FaceSet::new(mesh.f.clone(), num_verts);

    for (fi, &[a, b, c]) in mesh.f.iter().enumerate() {
        m.add_edge(a, b);
        m.add_edge(b, c);
        m.add_edge(c, a);

        let Some(q) = Quadric::from_triangle([v[a], v[b], v[c]]) else {
            faces.kill(fi);
            continue;
        };
        for vi in [a, b, c] {
            m.data[vi].0 += q;
        }
    }
    if faces.live() < num_tris {
        debug!("dropped {} zero area faces", num_tris - faces.live());
    }

    let mut pq = CandidateQueue::with_capacity(num_tris * 3 / 2);
    for [e0, e1] in m.ord_edges() {
        pq.refresh(&m, e0, e1);
    }

    let interval = params.interval();
    let mut collapses = 0;
    let stop = loop {
        if params.time_limit.is_some_and(|l| start.elapsed() >= l) {
            break StopReason::TimeLimit;
        }
        if faces.live() <= target {
            break StopReason::TargetReached;
        }
        if pq.is_empty() {
            break StopReason::QueueExhausted;
        }
        if collapses >= max_collapses {
            break StopReason::CollapseCap;
        }

        let Some(([u, w], cand)) = pq.pop() else {
            break StopReason::QueueExhausted;
        };
        if m.is_deleted(u) || m.is_deleted(w) || !m.is_adj(u, w) {
            continue;
        }

        // -- Commit
        m.merge(u, w, |&(qu, _), &(qw, _)| (qu + qw, cand.pos));
        faces.collapse(w, u);
        for adj in m.vertex_adj(u) {
            pq.refresh(&m, u, adj);
        }

        collapses += 1;
        if collapses % interval == 0 {
            let p = Progress {
                collapses,
                live_tris: faces.live(),
                target_tris: target,
                initial_tris: num_tris,
                elapsed: start.elapsed(),
            };
            debug!("{p}");
            if progress(&p).is_break() {
                break StopReason::Cancelled;
            }
        }
    };
    if stop == StopReason::TimeLimit {
        warn!(
            "time limit reached after {collapses} collapses, {} faces left",
            faces.live()
        );
    }

    let out = compact(&m, &faces, mesh.uv.as_deref());
    let report = Report {
        faces_before: num_tris,
        faces_after: out.num_tris(),
        verts_before: num_verts,
        verts_after: out.num_verts(),
        target,
        collapses,
        stop,
    };
    info!(
        "simplified {} -> {} faces, {} -> {} verts ({collapses} collapses, {stop:?})",
        report.faces_before, report.faces_after, report.verts_before, report.verts_after
    );
    *mesh = out;
    Ok(report)
}

/// Expected outcome of [`simplify`] without running it: the face count is taken from the
/// budget, the vertex count is left as is.
pub fn estimate(mesh: &TriMesh, params: &Params) -> Result<Report> {
    mesh.validate()?;
    let num_tris = mesh.num_tris();
    let Budget {
        target,
        max_collapses,
    } = params.budget(num_tris)?;
    let expected = target.max(num_tris.saturating_sub(max_collapses));
    Ok(Report {
        faces_before: num_tris,
        faces_after: expected.min(num_tris),
        verts_before: mesh.num_verts(),
        verts_after: mesh.num_verts(),
        target,
        collapses: 0,
        stop: StopReason::DryRun,
    })
}
