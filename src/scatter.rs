//! Sparse (COO) to dense scatter-add accumulation of per-edge forces.

use glam::DVec2;

use crate::geometry::Edge;

/// Scatter per-edge 2D force contributions into a dense per-vertex force
/// array of length `n`.
///
/// For every edge `(i, j)` with contribution `f`: `out[i] += f` and
/// `out[j] -= f`. This is the direct, sequential equivalent of the
/// original's `_dense` COO-to-dense helper, implemented without a
/// sparse-matrix library, as a straightforward scatter-add.
///
/// Summation order follows the order of `edges`/`contributions`, which
/// must match 1:1 and is the caller's responsibility to keep stable across
/// runs for bit-identical reproducibility.
pub fn scatter_add_dense(n: usize, edges: &[Edge], contributions: &[DVec2]) -> Vec<DVec2> {
  assert_eq!(edges.len(), contributions.len());
  let mut out = vec![DVec2::ZERO; n];
  for (edge, &f) in edges.iter().zip(contributions.iter()) {
    out[edge.lo as usize] += f;
    out[edge.hi as usize] -= f;
  }
  out
}

#[cfg(test)]
#[path = "scatter_test.rs"]
mod scatter_test;
