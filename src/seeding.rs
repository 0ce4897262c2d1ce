//! Initial point seeding (C3): regular-grid rejection sampling.

use glam::DVec2;
use rand::Rng;

use crate::domain::{BBox, SignedDistance};
use crate::error::{MeshError, MeshResult};
use crate::size_field::SizeField;

/// Build the initial point set: a regular lattice over `bbox` at spacing
/// `h0`, rejection-sampled by local coarseness of `fh`, filtered to the
/// interior of `fd`, with the fixed points `pfix` prepended.
///
/// Mirrors the original's `_generate_initial_points`.
pub fn generate_initial_points(
  h0: f64,
  geps: f64,
  bbox: BBox,
  fh: &dyn SizeField,
  fd: &dyn SignedDistance,
  pfix: &[DVec2],
  rng: &mut impl Rng,
) -> MeshResult<Vec<DVec2>> {
  let mut lattice = Vec::new();
  let mut x = bbox.x.0;
  while x <= bbox.x.1 + 1e-12 {
    let mut y = bbox.y.0;
    while y <= bbox.y.1 + 1e-12 {
      lattice.push(DVec2::new(x, y));
      y += h0;
    }
    x += h0;
  }

  let r = fh.eval_batch(&lattice);
  let r_min = r
    .iter()
    .copied()
    .filter(|&v| v >= h0)
    .fold(f64::INFINITY, f64::min);

  if !r_min.is_finite() {
    return Err(MeshError::InvalidParameter(
      "size field everywhere finer than min_edge_length".into(),
    ));
  }

  let mut accepted: Vec<DVec2> = lattice
    .into_iter()
    .zip(r.into_iter())
    .filter(|(_, hi)| rng.gen::<f64>() < (r_min / hi).powi(2))
    .map(|(p, _)| p)
    .collect();

  let interior = fd.eval_batch(&accepted);
  let mut kept = Vec::with_capacity(accepted.len());
  for (p, d) in accepted.drain(..).zip(interior.into_iter()) {
    if d < geps {
      kept.push(p);
    }
  }

  let mut points = Vec::with_capacity(pfix.len() + kept.len());
  points.extend_from_slice(pfix);
  points.extend(kept);

  if points.is_empty() {
    return Err(MeshError::EmptyInitialization);
  }

  Ok(points)
}

#[cfg(test)]
#[path = "seeding_test.rs"]
mod seeding_test;
