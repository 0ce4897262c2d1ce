use super::*;

#[test]
fn default_options_validate_with_a_positive_min_edge_length() {
  let opts = MeshOptions::default();
  assert!(opts.validate(0.1).is_ok());
}

#[test]
fn zero_max_iter_is_rejected() {
  let opts = MeshOptions::default().with_max_iter(0);
  assert!(matches!(
    opts.validate(0.1),
    Err(MeshError::InvalidParameter(_))
  ));
}

#[test]
fn non_positive_min_edge_length_is_rejected() {
  let opts = MeshOptions::default();
  assert!(matches!(
    opts.validate(0.0),
    Err(MeshError::InvalidParameter(_))
  ));
  assert!(matches!(
    opts.validate(-1.0),
    Err(MeshError::InvalidParameter(_))
  ));
}

#[test]
fn builder_methods_set_every_field() {
  let opts = MeshOptions::new()
    .with_max_iter(10)
    .with_seed(42)
    .with_pfix(vec![DVec2::new(0.0, 0.0)])
    .with_points(vec![DVec2::new(1.0, 1.0)])
    .with_min_edge_length(0.05)
    .with_plot(5)
    .with_lock_boundary(true)
    .with_pseudo_dt(0.1);

  assert_eq!(opts.max_iter, 10);
  assert_eq!(opts.seed, 42);
  assert_eq!(opts.pfix.len(), 1);
  assert_eq!(opts.points.unwrap().len(), 1);
  assert_eq!(opts.min_edge_length, Some(0.05));
  assert_eq!(opts.plot, Some(5));
  assert!(opts.lock_boundary);
  assert_eq!(opts.pseudo_dt, 0.1);
}

#[test]
fn known_option_keys_are_accepted() {
  for key in RECOGNIZED_OPTION_KEYS {
    assert!(check_recognized_option(key).is_ok());
  }
}

#[test]
fn unknown_option_key_is_rejected() {
  let err = check_recognized_option("typo_field").unwrap_err();
  assert!(matches!(err, MeshError::UnknownOption(k) if k == "typo_field"));
}

#[test]
fn blend_options_defaults_and_builders() {
  let defaults = BlendOptions::default();
  assert_eq!(defaults.blend_polynomial, 2);

  let custom = BlendOptions::new()
    .with_blend_width(100.0)
    .with_blend_polynomial(3)
    .with_blend_max_iter(5)
    .with_blend_nnear(16);
  assert_eq!(custom.blend_width, 100.0);
  assert_eq!(custom.blend_polynomial, 3);
  assert_eq!(custom.blend_max_iter, 5);
  assert_eq!(custom.blend_nnear, 16);
}
