use super::*;
use crate::domain::BBox;
use crate::size_field::UniformSizeField;

fn disc_sdf(p: DVec2) -> f64 {
  p.length() - 0.5
}

fn disc_domain() -> Domain<'static> {
  Domain::new(BBox::new((-0.5, 0.5), (-0.5, 0.5)), &disc_sdf)
}

#[test]
fn produces_a_nonempty_interior_mesh() {
  let domain = disc_domain();
  let fh = UniformSizeField::new(0.15);
  let opts = MeshOptions::default().with_max_iter(5).with_seed(1);

  let output = generate_mesh(&domain, &fh, &opts).unwrap();
  assert!(!output.points.is_empty());
  assert!(!output.triangles.is_empty());
  assert_eq!(output.diagnostics.iterations_run, 5);
  assert_eq!(output.diagnostics.final_point_count, output.points.len());
  assert_eq!(
    output.diagnostics.final_triangle_count,
    output.triangles.len()
  );

  let max_sdf = output
    .points
    .iter()
    .map(|&p| disc_sdf(p))
    .fold(f64::MIN, f64::max);
  assert!(max_sdf < 1e-2, "point strayed far outside the disc: {max_sdf}");
}

#[test]
fn is_deterministic_for_a_fixed_seed() {
  let domain = disc_domain();
  let fh = UniformSizeField::new(0.15);
  let opts = MeshOptions::default().with_max_iter(4).with_seed(7);

  let a = generate_mesh(&domain, &fh, &opts).unwrap();
  let b = generate_mesh(&domain, &fh, &opts).unwrap();

  assert_eq!(a.points.len(), b.points.len());
  for (pa, pb) in a.points.iter().zip(b.points.iter()) {
    assert_eq!(pa.x.to_bits(), pb.x.to_bits());
    assert_eq!(pa.y.to_bits(), pb.y.to_bits());
  }
}

#[test]
fn fixed_points_survive_to_the_final_mesh() {
  let domain = disc_domain();
  let fh = UniformSizeField::new(0.2);
  let pin = DVec2::new(0.1, 0.0);
  let opts = MeshOptions::default()
    .with_max_iter(4)
    .with_seed(3)
    .with_pfix(vec![pin]);

  let output = generate_mesh(&domain, &fh, &opts).unwrap();
  assert!(output.points.iter().any(|&p| p == pin));
}

#[test]
fn zero_max_iter_is_rejected() {
  let domain = disc_domain();
  let fh = UniformSizeField::new(0.2);
  let opts = MeshOptions::default().with_max_iter(0);
  assert!(matches!(
    generate_mesh(&domain, &fh, &opts),
    Err(MeshError::InvalidParameter(_))
  ));
}

#[test]
fn unresolvable_min_edge_length_is_rejected() {
  let domain = disc_domain();
  let fh: &dyn SizeField = &|_: DVec2| 0.2; // bare closure: no hmin()
  let opts = MeshOptions::default();
  assert!(matches!(
    generate_mesh(&domain, fh, &opts),
    Err(MeshError::InvalidParameter(_))
  ));
}

#[test]
fn cancellation_before_the_first_iteration_still_returns_a_fixed_mesh() {
  let domain = disc_domain();
  let fh = UniformSizeField::new(0.15);
  let opts = MeshOptions::default().with_max_iter(10).with_seed(1);
  let cancel = CancellationToken::new();
  cancel.cancel();

  let output = generate_mesh_with(
    &domain,
    &fh,
    &opts,
    &DelaunatorTriangulator,
    &EdgeCountBoundaryExtractor,
    &DefaultMeshFixer,
    &cancel,
  )
  .unwrap();

  assert_eq!(output.diagnostics.iterations_run, 1);
  assert!(!output.points.is_empty());
}

#[test]
fn lock_boundary_keeps_boundary_vertices_pinned_through_the_run() {
  let domain = disc_domain();
  let fh = UniformSizeField::new(0.15);
  let opts = MeshOptions::default()
    .with_max_iter(5)
    .with_seed(2)
    .with_lock_boundary(true);

  let output = generate_mesh(&domain, &fh, &opts).unwrap();
  assert!(!output.points.is_empty());
}
