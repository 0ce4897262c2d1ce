//! Core relaxation loop (C6): Init -> Iterating -> Terminated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use web_time::Instant;

use crate::boundary::{BoundaryExtractor, EdgeCountBoundaryExtractor};
use crate::domain::Domain;
use crate::error::{MeshError, MeshResult};
use crate::fixer::{DefaultMeshFixer, MeshFixer};
use crate::forces::compute_forces;
use crate::geometry::{centroid, closest_node};
use crate::options::MeshOptions;
use crate::projection::project_points_back;
use crate::seeding::generate_initial_points;
use crate::size_field::SizeField;
use crate::triangulation::{DelaunatorTriangulator, DelaunayTriangulator};

/// A cooperative cancellation signal, checked once at the top of every
/// iteration and never within one.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
  pub fn new() -> Self {
    Self(Arc::new(AtomicBool::new(false)))
  }

  pub fn cancel(&self) {
    self.0.store(true, Ordering::Relaxed);
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Relaxed)
  }
}

/// Summary of a completed `generate_mesh` run.
#[derive(Clone, Copy, Debug)]
pub struct MeshDiagnostics {
  pub iterations_run: u32,
  pub final_point_count: usize,
  pub final_triangle_count: usize,
  pub total_wall_clock: std::time::Duration,
}

/// The finished mesh plus a summary of the run that produced it.
pub struct MeshOutput {
  pub points: Vec<DVec2>,
  pub triangles: Vec<[u32; 3]>,
  pub diagnostics: MeshDiagnostics,
}

/// Generate a 2D unstructured triangular mesh over `domain` with target
/// edge lengths `fh`, starting from a seeded lattice (or caller-supplied
/// points) and relaxing for exactly `opts.max_iter` iterations.
///
/// Mirrors the original's `generate_mesh`: no early-convergence check,
/// since short stalls in the relaxation can recover within a handful of
/// further iterations.
pub fn generate_mesh(domain: &Domain, fh: &dyn SizeField, opts: &MeshOptions) -> MeshResult<MeshOutput> {
  generate_mesh_with(
    domain,
    fh,
    opts,
    &DelaunatorTriangulator,
    &EdgeCountBoundaryExtractor,
    &DefaultMeshFixer,
    &CancellationToken::new(),
  )
}

/// As [`generate_mesh`], but with every external collaborator supplied
/// explicitly. Used by [`crate::multiscale::generate_multiscale_mesh`] so
/// every sub-domain run shares one triangulator/fixer instance.
#[allow(clippy::too_many_arguments)]
pub fn generate_mesh_with(
  domain: &Domain,
  fh: &dyn SizeField,
  opts: &MeshOptions,
  triangulator: &dyn DelaunayTriangulator,
  boundary_extractor: &dyn BoundaryExtractor,
  fixer: &dyn MeshFixer,
  cancel: &CancellationToken,
) -> MeshResult<MeshOutput> {
  let min_edge_length = opts
    .min_edge_length
    .or_else(|| fh.hmin())
    .ok_or_else(|| MeshError::InvalidParameter("`min_edge_length` could not be resolved".into()))?;
  opts.validate(min_edge_length)?;

  let geps = 1e-3 * min_edge_length;
  let deps = f64::EPSILON.sqrt();
  let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);

  let mut points = match &opts.points {
    Some(p) => p.clone(),
    None => generate_initial_points(
      min_edge_length,
      geps,
      domain.bbox,
      fh,
      domain.fd,
      &opts.pfix,
      &mut rng,
    )?,
  };

  let start = Instant::now();
  let mut triangles: Vec<[u32; 3]> = Vec::new();
  let mut iterations_run = 0u32;

  for iteration in 0..opts.max_iter {
    let cancelled = cancel.is_cancelled();
    iterations_run = iteration + 1;

    let tri_result = triangulator.triangulate(&points);
    points = tri_result.vertices;
    triangles = tri_result.triangles;

    let mut pinned: std::collections::BTreeSet<usize> = std::collections::BTreeSet::new();
    if opts.lock_boundary {
      let boundary = boundary_extractor.boundary(&points, &triangles);
      for b in boundary {
        pinned.insert(closest_node(b, &points));
      }
    }

    for &f in &opts.pfix {
      let idx = closest_node(f, &points);
      points[idx] = f;
      pinned.insert(idx);
    }

    triangles.retain(|&tri| domain.fd.eval(centroid(tri, &points)) < -geps);

    let is_last = cancelled || iteration + 1 == opts.max_iter;
    if is_last {
      let fixed = fixer.fix(&points, &triangles, true);
      let final_point_count = fixed.points.len();
      let final_triangle_count = fixed.triangles.len();
      return Ok(MeshOutput {
        points: fixed.points,
        triangles: fixed.triangles,
        diagnostics: MeshDiagnostics {
          iterations_run,
          final_point_count,
          final_triangle_count,
          total_wall_clock: start.elapsed(),
        },
      });
    }

    let mut forces = compute_forces(&points, &triangles, fh);
    for &idx in &pinned {
      forces[idx] = DVec2::ZERO;
    }

    let mut max_force = 0.0f64;
    for (p, f) in points.iter_mut().zip(forces.iter()) {
      *p += opts.pseudo_dt * *f;
      max_force = max_force.max(f.length());
    }

    project_points_back(&mut points, domain.fd, deps, &pinned);

    let max_movement = opts.pseudo_dt * max_force;
    tracing::info!(
      iteration,
      points = points.len(),
      triangles = triangles.len(),
      max_movement,
      elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
      "relaxation iteration complete"
    );
  }

  unreachable!("max_iter > 0 is enforced by validate(), so the loop always runs at least once and returns via the terminal iteration")
}

#[cfg(test)]
#[path = "relax_test.rs"]
mod relax_test;
