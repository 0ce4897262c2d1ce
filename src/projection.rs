//! Boundary projection (C4): pull exterior points back to the implicit
//! boundary by a single Newton-style step.

use std::collections::BTreeSet;

use glam::DVec2;

use crate::domain::SignedDistance;

/// Project every exterior, non-pinned point (`fd(p) > 0`) back toward the
/// zero level set of `fd` by one step: `p -= d * grad(fd) / |grad(fd)|^2`.
///
/// `grad(fd)` is estimated by forward differencing with step `deps`. If
/// evaluating `fd` over just the exterior subset fails to produce finite
/// values (the original's all-exterior SDF batch failure, §4.C4), this
/// falls back to evaluating the gradient over the full point set and
/// selecting the exterior rows, so a caller's SDF that only tolerates
/// batches with at least one interior point still works.
///
/// Indices in `pinned` (fixed points and, when boundary locking is on,
/// boundary points) are excluded from projection entirely: they are left
/// bit-for-bit unchanged, matching the force-zeroing already applied to
/// them in the relaxation step.
///
/// This is a single projection step per iteration, not iterated to
/// convergence.
pub fn project_points_back(
  points: &mut [DVec2],
  fd: &dyn SignedDistance,
  deps: f64,
  pinned: &BTreeSet<usize>,
) {
  let d = fd.eval_batch(points);
  let exterior_idx: Vec<usize> = d
    .iter()
    .enumerate()
    .filter(|&(i, &di)| di > 0.0 && !pinned.contains(&i))
    .map(|(i, _)| i)
    .collect();

  if exterior_idx.is_empty() {
    return;
  }

  let exterior_points: Vec<DVec2> = exterior_idx.iter().map(|&i| points[i]).collect();
  let gradients = match gradient_on_subset(fd, &exterior_points, deps) {
    Some(grads) => grads,
    None => gradient_via_full_set(fd, points, &exterior_idx, deps),
  };

  for (k, &idx) in exterior_idx.iter().enumerate() {
    let di = d[idx];
    let grad = gradients[k];
    let mut grad2 = grad.length_squared();
    if grad2 < deps {
      grad2 = deps;
    }
    points[idx] -= di * grad / grad2;
  }
}

/// Estimate the gradient of `fd` at each of `subset` via forward
/// differencing, evaluating `fd` only over `subset`-sized batches. Returns
/// `None` if any resulting value is non-finite, signalling the SDF
/// rejected this (likely all-exterior) batch.
fn gradient_on_subset(fd: &dyn SignedDistance, subset: &[DVec2], deps: f64) -> Option<Vec<DVec2>> {
  let base = fd.eval_batch(subset);
  if base.iter().any(|v| !v.is_finite()) {
    return None;
  }

  let mut dx_points = subset.to_vec();
  for p in &mut dx_points {
    p.x += deps;
  }
  let dx = fd.eval_batch(&dx_points);

  let mut dy_points = subset.to_vec();
  for p in &mut dy_points {
    p.y += deps;
  }
  let dy = fd.eval_batch(&dy_points);

  if dx.iter().chain(dy.iter()).any(|v| !v.is_finite()) {
    return None;
  }

  Some(
    (0..subset.len())
      .map(|i| DVec2::new((dx[i] - base[i]) / deps, (dy[i] - base[i]) / deps))
      .collect(),
  )
}

/// Fallback: evaluate the gradient over the *entire* point set, then pick
/// out the rows corresponding to `exterior_idx`. Used when an SDF batch
/// restricted to exterior-only points fails its bbox check.
fn gradient_via_full_set(
  fd: &dyn SignedDistance,
  all_points: &[DVec2],
  exterior_idx: &[usize],
  deps: f64,
) -> Vec<DVec2> {
  let base = fd.eval_batch(all_points);

  let mut dx_points = all_points.to_vec();
  for p in &mut dx_points {
    p.x += deps;
  }
  let dx = fd.eval_batch(&dx_points);

  let mut dy_points = all_points.to_vec();
  for p in &mut dy_points {
    p.y += deps;
  }
  let dy = fd.eval_batch(&dy_points);

  exterior_idx
    .iter()
    .map(|&i| DVec2::new((dx[i] - base[i]) / deps, (dy[i] - base[i]) / deps))
    .collect()
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;
