//! Delaunay triangulation collaborator.
//!
//! Construction of the triangulation primitive itself is out of scope for
//! this crate's core (§1): it is an external, assumed-available
//! black-box. This module defines the trait boundary the relaxation loop
//! (C6) talks to, plus a default implementation backed by the `delaunator`
//! crate so the crate is runnable end to end without a caller-supplied
//! triangulator.

use glam::DVec2;

/// Result of triangulating a point set: the (possibly deduplicated and
/// reordered) vertex positions, and the triangles as index triples into
/// them.
pub struct TriangulationResult {
  pub vertices: Vec<DVec2>,
  pub triangles: Vec<[u32; 3]>,
}

/// A Delaunay triangulator: given a flat point set, builds a triangulation
/// and exposes its finite vertices and cells.
///
/// Duplicate input points are deduplicated silently, matching the
/// behavior the relaxation loop (C6) relies on.
pub trait DelaunayTriangulator: Sync {
  fn triangulate(&self, points: &[DVec2]) -> TriangulationResult;
}

/// Default triangulator backed by the `delaunator` crate.
///
/// `delaunator` does not itself tolerate duplicate input points the way
/// the original's CGAL-backed triangulator silently does, so duplicates
/// are coalesced here (by exact bit-pattern equality, which is sufficient
/// since duplicate points reaching this wrapper come from re-triangulating
/// a point set that may contain coincident fixed points or concatenated
/// sub-domain boundaries, not from floating-point noise).
#[derive(Default, Clone, Copy)]
pub struct DelaunatorTriangulator;

impl DelaunayTriangulator for DelaunatorTriangulator {
  fn triangulate(&self, points: &[DVec2]) -> TriangulationResult {
    let mut vertices: Vec<DVec2> = Vec::with_capacity(points.len());
    let mut seen = std::collections::HashMap::with_capacity(points.len());
    for &p in points {
      let key = (p.x.to_bits(), p.y.to_bits());
      seen.entry(key).or_insert_with(|| {
        vertices.push(p);
        vertices.len() - 1
      });
    }

    if vertices.len() < 3 {
      return TriangulationResult {
        vertices,
        triangles: Vec::new(),
      };
    }

    let del_points: Vec<delaunator::Point> = vertices
      .iter()
      .map(|p| delaunator::Point { x: p.x, y: p.y })
      .collect();
    let result = delaunator::triangulate(&del_points);

    let triangles = result
      .triangles
      .chunks_exact(3)
      .map(|tri| [tri[0] as u32, tri[1] as u32, tri[2] as u32])
      .collect();

    TriangulationResult { vertices, triangles }
  }
}

#[cfg(test)]
#[path = "triangulation_test.rs"]
mod triangulation_test;
