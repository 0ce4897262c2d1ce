use super::*;
use crate::size_field::UniformSizeField;

#[test]
fn edge_force_is_repulsive_only() {
  // Compressed: rescaled target exceeds length -> positive force.
  assert!((edge_force_scalar(1.0, 1.0, 1.5) - 0.5).abs() < 1e-12);
  // Stretched: rescaled target is below length -> zero force.
  assert_eq!(edge_force_scalar(2.0, 1.0, 1.5), 0.0);
  // Exactly at the rescaled target: zero force.
  assert_eq!(edge_force_scalar(1.5, 1.0, 1.5), 0.0);
}

#[test]
fn rescale_factor_matches_rms_ratio() {
  let lengths = [1.0, 1.0];
  let targets = [1.0, 1.0];
  let scale = rescale_factor(&lengths, &targets);
  assert!((scale - 1.2).abs() < 1e-12);
}

#[test]
fn compressed_edge_produces_repulsive_force() {
  let points = vec![
    DVec2::new(0.0, 0.0),
    DVec2::new(0.05, 0.0),
    DVec2::new(0.0, 0.05),
  ];
  let triangles = [[0u32, 1, 2]];
  let fh = UniformSizeField::new(0.1);
  let forces = compute_forces(&points, &triangles, &fh);
  // Vertex 0 is shared by the two short compressed edges; the net
  // force should push it away from both neighbors.
  assert!(forces[0].x < 0.0 && forces[0].y < 0.0);
}

#[test]
fn empty_triangulation_yields_zero_forces() {
  let points = vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)];
  let fh = UniformSizeField::new(0.1);
  let forces = compute_forces(&points, &[], &fh);
  assert_eq!(forces.len(), 2);
  assert!(forces.iter().all(|&f| f == DVec2::ZERO));
}

#[test]
fn zero_length_edge_does_not_panic() {
  let points = vec![
    DVec2::new(0.0, 0.0),
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 1.0),
  ];
  let triangles = [[0u32, 1, 2]];
  let fh = UniformSizeField::new(0.1);
  let forces = compute_forces(&points, &triangles, &fh);
  assert_eq!(forces.len(), 3);
  for f in &forces {
    assert!(f.x.is_finite() && f.y.is_finite());
  }
}
