//! Signed distance functions and the domains that bundle them with a bbox.

use glam::DVec2;

/// Axis-aligned bounding box: `((xmin, xmax), (ymin, ymax))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
  pub x: (f64, f64),
  pub y: (f64, f64),
}

impl BBox {
  pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
    Self { x, y }
  }

  /// `true` iff `xmin <= xmax` and `ymin <= ymax`.
  pub fn is_valid(&self) -> bool {
    self.x.0 <= self.x.1 && self.y.0 <= self.y.1
  }
}

/// Opaque signed distance function: negative inside, zero on the boundary,
/// positive outside.
///
/// Implementors evaluate a batch of points at once so that object-backed
/// evaluators (e.g. a gridded field with internal caching) can do better
/// than pointwise dispatch. A blanket impl below lets any `Fn(DVec2) -> f64`
/// closure satisfy this trait via pointwise evaluation, so callers can pass
/// either a closure or a richer evaluator uniformly.
pub trait SignedDistance: Sync {
  /// Evaluate the signed distance at every point in `points`.
  fn eval_batch(&self, points: &[DVec2]) -> Vec<f64>;

  /// Evaluate a single point. Default forwards to `eval_batch`.
  fn eval(&self, point: DVec2) -> f64 {
    self.eval_batch(&[point])[0]
  }
}

impl<F> SignedDistance for F
where
  F: Fn(DVec2) -> f64 + Sync,
{
  fn eval_batch(&self, points: &[DVec2]) -> Vec<f64> {
    points.iter().map(|&p| self(p)).collect()
  }
}

/// Bundles a signed distance function with the bounding box it is valid
/// over, mirroring the original's `Domain` class.
pub struct Domain<'a> {
  pub bbox: BBox,
  pub fd: &'a dyn SignedDistance,
}

impl<'a> Domain<'a> {
  pub fn new(bbox: BBox, fd: &'a dyn SignedDistance) -> Self {
    Self { bbox, fd }
  }
}

#[cfg(test)]
#[path = "domain_test.rs"]
mod domain_test;
