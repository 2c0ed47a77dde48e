use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;
use pars3d::FaceKind;

use mesh_qem::{Args, F, TriMesh, estimate, simplify_with_progress};

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.params();
    let mut scene = pars3d::load(&args.input)
        .map_err(|e| anyhow!("failed to open {}: {e:?}", args.input))?;
    let mut m = scene.into_flattened_mesh();
    // just the vertices and faces, fuse together identical positions
    m.geometry_only();

    let mut mesh = TriMesh::from_polygons(
        m.v.iter().map(|p| p.map(|c| c as F)).collect(),
        m.f.iter().map(FaceKind::as_slice),
    )?;

    if args.dry_run {
        let report = estimate(&mesh, &params)?;
        println!("{report}");
        return Ok(());
    }

    let mut last_emit: Option<Instant> = None;
    let report = simplify_with_progress(&mut mesh, &params, |p| {
        if last_emit.is_none_or(|t| t.elapsed() >= Duration::from_secs(1)) {
            match p.eta() {
                Some(eta) => info!("{}: {p} eta {:.1}s", args.input, eta.as_secs_f64()),
                None => info!("{}: {p}", args.input),
            }
            last_emit = Some(Instant::now());
        }
        ControlFlow::Continue(())
    })?;

    m.v = mesh.v.iter().map(|p| p.map(|c| c as pars3d::F)).collect();
    m.f = mesh.f.iter().map(|&t| FaceKind::Tri(t)).collect();
    m.repopulate_scene(&mut scene);
    pars3d::save(&args.output, &scene)
        .map_err(|e| anyhow!("failed to save to {}: {e:?}", args.output))?;

    println!("{report}");
    Ok(())
}
