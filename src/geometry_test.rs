use super::*;

#[test]
fn unique_edges_coalesces_shared_sides() {
  // Two triangles sharing edge (1,2).
  let triangles = [[0, 1, 2], [1, 2, 3]];
  let edges = unique_edges(&triangles);
  assert_eq!(edges.len(), 5);
  let shared = Edge::new(1, 2);
  assert_eq!(edges.iter().filter(|&&e| e == shared).count(), 1);
}

#[test]
fn unique_edges_canonicalizes_ordering() {
  let edges = unique_edges(&[[2, 0, 1]]);
  for edge in edges {
    assert!(edge.lo < edge.hi);
  }
}

#[test]
fn closest_node_breaks_ties_on_lowest_index() {
  let points = vec![
    DVec2::new(-1.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(0.0, 0.0),
  ];
  // Query equidistant from indices 0 and 1.
  assert_eq!(closest_node(DVec2::new(0.0, 0.0), &points), 2);
  assert_eq!(closest_node(DVec2::new(-0.5, 0.5), &points), 0);
}

#[test]
fn centroid_is_arithmetic_mean() {
  let points = vec![
    DVec2::new(0.0, 0.0),
    DVec2::new(3.0, 0.0),
    DVec2::new(0.0, 3.0),
  ];
  let c = centroid([0, 1, 2], &points);
  assert!((c - DVec2::new(1.0, 1.0)).length() < 1e-12);
}
