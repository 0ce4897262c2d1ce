//! Mesh post-cleanup ("fixer") collaborator.
//!
//! Mesh post-cleanup (degenerate-triangle removal, connected-component
//! pruning) is out of scope for this crate's core (§1) and is invoked
//! once at termination. This module defines the trait boundary and a
//! default implementation.

use std::collections::HashMap;

use glam::DVec2;

use crate::geometry::Edge;

/// Cleaned mesh plus a short diagnostic summary of what was removed.
pub struct FixedMesh {
  pub points: Vec<DVec2>,
  pub triangles: Vec<[u32; 3]>,
  pub degenerate_triangles_removed: usize,
  pub disconnected_triangles_removed: usize,
  pub unused_points_removed: usize,
}

/// Given (P,T), returns a cleaned (P',T') with degenerate triangles
/// dropped, disconnected components other than the largest pruned, and
/// (if `delete_unused`) orphaned vertices dropped and the surviving
/// triangles re-indexed.
pub trait MeshFixer: Sync {
  fn fix(&self, points: &[DVec2], triangles: &[[u32; 3]], delete_unused: bool) -> FixedMesh;
}

/// Default fixer: drops triangles with a repeated vertex index or zero
/// signed area, keeps only the largest edge-connected component of what
/// remains, then (if requested) compacts away unreferenced vertices.
#[derive(Default, Clone, Copy)]
pub struct DefaultMeshFixer;

impl DefaultMeshFixer {
  fn is_degenerate(tri: [u32; 3], points: &[DVec2]) -> bool {
    if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
      return true;
    }
    let a = points[tri[0] as usize];
    let b = points[tri[1] as usize];
    let c = points[tri[2] as usize];
    let signed_area2 = (b - a).perp_dot(c - a);
    signed_area2.abs() < 1e-15
  }

  /// Union-find over triangles connected by a shared edge; keeps only the
  /// largest component and reports how many triangles were pruned from
  /// the smaller ones.
  fn prune_to_largest_component(triangles: Vec<[u32; 3]>) -> (Vec<[u32; 3]>, usize) {
    if triangles.len() <= 1 {
      return (triangles, 0);
    }

    let mut parent: Vec<usize> = (0..triangles.len()).collect();

    fn find(parent: &mut [usize], x: usize) -> usize {
      if parent[x] != x {
        let root = find(parent, parent[x]);
        parent[x] = root;
      }
      parent[x]
    }

    let mut edge_owner: HashMap<Edge, usize> = HashMap::new();
    for (idx, tri) in triangles.iter().enumerate() {
      for &(a, b) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
        let edge = Edge::new(a, b);
        match edge_owner.get(&edge) {
          Some(&owner) => {
            let ra = find(&mut parent, idx);
            let rb = find(&mut parent, owner);
            if ra != rb {
              parent[ra] = rb;
            }
          }
          None => {
            edge_owner.insert(edge, idx);
          }
        }
      }
    }

    let roots: Vec<usize> = (0..triangles.len()).map(|i| find(&mut parent, i)).collect();
    let mut sizes: HashMap<usize, usize> = HashMap::new();
    for &root in &roots {
      *sizes.entry(root).or_insert(0) += 1;
    }
    let largest_root = *sizes
      .iter()
      .max_by_key(|&(_, &size)| size)
      .map(|(root, _)| root)
      .expect("triangles is non-empty here");

    let kept: Vec<[u32; 3]> = triangles
      .iter()
      .zip(roots.iter())
      .filter(|&(_, &root)| root == largest_root)
      .map(|(&tri, _)| tri)
      .collect();
    let removed = triangles.len() - kept.len();
    (kept, removed)
  }
}

impl MeshFixer for DefaultMeshFixer {
  fn fix(&self, points: &[DVec2], triangles: &[[u32; 3]], delete_unused: bool) -> FixedMesh {
    let non_degenerate: Vec<[u32; 3]> = triangles
      .iter()
      .copied()
      .filter(|&tri| !Self::is_degenerate(tri, points))
      .collect();
    let degenerate_triangles_removed = triangles.len() - non_degenerate.len();

    let (kept, disconnected_triangles_removed) = Self::prune_to_largest_component(non_degenerate);

    if !delete_unused {
      return FixedMesh {
        points: points.to_vec(),
        triangles: kept,
        degenerate_triangles_removed,
        disconnected_triangles_removed,
        unused_points_removed: 0,
      };
    }

    let mut used = vec![false; points.len()];
    for tri in &kept {
      used[tri[0] as usize] = true;
      used[tri[1] as usize] = true;
      used[tri[2] as usize] = true;
    }

    let mut remap = vec![u32::MAX; points.len()];
    let mut new_points = Vec::new();
    for (old_idx, &is_used) in used.iter().enumerate() {
      if is_used {
        remap[old_idx] = new_points.len() as u32;
        new_points.push(points[old_idx]);
      }
    }

    let new_triangles: Vec<[u32; 3]> = kept
      .iter()
      .map(|tri| [remap[tri[0] as usize], remap[tri[1] as usize], remap[tri[2] as usize]])
      .collect();

    FixedMesh {
      unused_points_removed: points.len() - new_points.len(),
      points: new_points,
      triangles: new_triangles,
      degenerate_triangles_removed,
      disconnected_triangles_removed,
    }
  }
}

#[cfg(test)]
#[path = "fixer_test.rs"]
mod fixer_test;
