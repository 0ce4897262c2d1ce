//! Persson–Strang force evaluator (C5).
//!
//! Only the Persson–Strang repulsive-bar force law ships. The Bossen–
//! Heckbert alternative present (commented out) in the original source is
//! explicitly not part of the contract and must not be implemented.

use glam::DVec2;
use rayon::prelude::*;

use crate::geometry::unique_edges;
use crate::scatter::scatter_add_dense;
use crate::size_field::SizeField;

/// Scale factor applied to target lengths for 2D (`1 + 0.4 / 2^(DIM-1)`
/// with `DIM = 2`).
pub const L0_MULT: f64 = 1.2;

/// Global rescale factor for target lengths: `L0mult * sqrt(sum L^2 / sum h^2)`.
///
/// Matches current total bar length to total target length so the system
/// neither collapses nor explodes; this is the key trick in the
/// Persson–Strang law.
pub fn rescale_factor(lengths: &[f64], target_lengths: &[f64]) -> f64 {
  let sum_l2: f64 = lengths.iter().map(|l| l * l).sum();
  let sum_h2: f64 = target_lengths.iter().map(|h| h * h).sum();
  L0_MULT * (sum_l2 / sum_h2).sqrt()
}

/// Repulsive-only scalar force for one edge: `max(h * scale - length, 0)`.
/// Compressed edges (shorter than their rescaled target) push apart;
/// stretched edges contribute nothing, since retriangulation handles
/// topology.
pub fn edge_force_scalar(length: f64, target_length: f64, scale: f64) -> f64 {
  (target_length * scale - length).max(0.0)
}

/// Compute the per-vertex restoring force field from the current
/// triangulation, following Persson & Strang's truss-of-bars analogy.
///
/// 1. Extract unique edges from `triangles`.
/// 2. Per edge: bar vector, length (clamped away from zero), and the
///    target length at the midpoint evaluated through `fh`.
/// 3. Rescale target lengths by a single global factor ([`rescale_factor`]).
/// 4. Repulsive-only scalar force per edge ([`edge_force_scalar`]),
///    scattered to a dense per-vertex array.
pub fn compute_forces(
  points: &[DVec2],
  triangles: &[[u32; 3]],
  fh: &dyn SizeField,
) -> Vec<DVec2> {
  let edges = unique_edges(triangles);
  if edges.is_empty() {
    return vec![DVec2::ZERO; points.len()];
  }

  let bar_vecs: Vec<DVec2> = edges
    .par_iter()
    .map(|e| points[e.lo as usize] - points[e.hi as usize])
    .collect();

  let lengths: Vec<f64> = bar_vecs
    .par_iter()
    .map(|v| {
      let l = v.length();
      if l == 0.0 {
        f64::EPSILON
      } else {
        l
      }
    })
    .collect();

  let midpoints: Vec<DVec2> = edges
    .iter()
    .map(|e| (points[e.lo as usize] + points[e.hi as usize]) / 2.0)
    .collect();
  let target_lengths = fh.eval_batch(&midpoints);

  let scale = rescale_factor(&lengths, &target_lengths);

  let contributions: Vec<DVec2> = (0..edges.len())
    .into_par_iter()
    .map(|i| {
      let f_scalar = edge_force_scalar(lengths[i], target_lengths[i], scale);
      (f_scalar / lengths[i]) * bar_vecs[i]
    })
    .collect();

  scatter_add_dense(points.len(), &edges, &contributions)
}

#[cfg(test)]
#[path = "forces_test.rs"]
mod forces_test;
