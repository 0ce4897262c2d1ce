use super::*;

#[test]
fn triangulates_a_simple_square() {
  let triangulator = DelaunatorTriangulator;
  let points = vec![
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
  ];
  let result = triangulator.triangulate(&points);
  assert_eq!(result.vertices.len(), 4);
  assert_eq!(result.triangles.len(), 2);
  for tri in &result.triangles {
    assert_ne!(tri[0], tri[1]);
    assert_ne!(tri[1], tri[2]);
    assert_ne!(tri[0], tri[2]);
  }
}

#[test]
fn deduplicates_coincident_points() {
  let triangulator = DelaunatorTriangulator;
  let points = vec![
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.0, 0.0), // duplicate of index 0
  ];
  let result = triangulator.triangulate(&points);
  assert_eq!(result.vertices.len(), 4);
}

#[test]
fn fewer_than_three_points_yields_no_triangles() {
  let triangulator = DelaunatorTriangulator;
  let points = vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)];
  let result = triangulator.triangulate(&points);
  assert!(result.triangles.is_empty());
}
