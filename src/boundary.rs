//! External boundary topology routine.

use glam::DVec2;

/// Given (P,T), returns the external boundary as a set of vertex
/// positions. Construction of the full mesh-topology toolkit is out of
/// scope for this crate's core (§1); this is the default implementation
/// of the `BoundaryExtractor` trait boundary.
pub trait BoundaryExtractor: Sync {
  fn boundary(&self, points: &[DVec2], triangles: &[[u32; 3]]) -> Vec<DVec2>;
}

/// Boundary = vertices incident to an edge that belongs to exactly one
/// triangle (an edge shared by two triangles is interior).
#[derive(Default, Clone, Copy)]
pub struct EdgeCountBoundaryExtractor;

impl BoundaryExtractor for EdgeCountBoundaryExtractor {
  fn boundary(&self, points: &[DVec2], triangles: &[[u32; 3]]) -> Vec<DVec2> {
    let mut edge_counts = std::collections::HashMap::new();
    for tri in triangles {
      for &(a, b) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
        let edge = crate::geometry::Edge::new(a, b);
        *edge_counts.entry(edge).or_insert(0u32) += 1;
      }
    }

    let mut boundary_vertices = std::collections::BTreeSet::new();
    for (edge, count) in edge_counts {
      if count == 1 {
        boundary_vertices.insert(edge.lo);
        boundary_vertices.insert(edge.hi);
      }
    }

    boundary_vertices
      .into_iter()
      .map(|idx| points[idx as usize])
      .collect()
  }
}

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;
