use super::*;

#[test]
fn bbox_validity() {
  assert!(BBox::new((-1.0, 1.0), (-1.0, 1.0)).is_valid());
  assert!(!BBox::new((1.0, -1.0), (-1.0, 1.0)).is_valid());
}

#[test]
fn closure_satisfies_signed_distance_via_blanket_impl() {
  let fd = |p: DVec2| p.length() - 1.0;
  let batch = vec![DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)];
  let values = fd.eval_batch(&batch);
  assert!((values[0] - (-1.0)).abs() < 1e-12);
  assert!((values[1] - 1.0).abs() < 1e-12);
}

#[test]
fn domain_bundles_bbox_and_fd() {
  let fd = |p: DVec2| p.length() - 1.0;
  let domain = Domain::new(BBox::new((-1.1, 1.1), (-1.1, 1.1)), &fd);
  assert!((domain.fd.eval(DVec2::ZERO) - (-1.0)).abs() < 1e-12);
}
