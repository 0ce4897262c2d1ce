//! Recognized configuration options for `generate_mesh`, mirroring the
//! original's `_parse_kwargs`/`opts` dict but typed as a builder.

use glam::DVec2;

use crate::error::{MeshError, MeshResult};

/// Options accepted by [`crate::relax::generate_mesh`].
#[derive(Clone, Debug)]
pub struct MeshOptions {
  pub max_iter: u32,
  pub seed: u64,
  pub pfix: Vec<DVec2>,
  pub points: Option<Vec<DVec2>>,
  pub min_edge_length: Option<f64>,
  /// Diagnostic cadence. Accepted for option-parsing parity with the
  /// original; a no-op in the core (§9), reserved for a downstream
  /// visualization crate.
  pub plot: Option<u32>,
  pub lock_boundary: bool,
  pub pseudo_dt: f64,
}

impl Default for MeshOptions {
  fn default() -> Self {
    Self {
      max_iter: 50,
      seed: 0,
      pfix: Vec::new(),
      points: None,
      min_edge_length: None,
      plot: None,
      lock_boundary: false,
      pseudo_dt: 0.2,
    }
  }
}

impl MeshOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_iter(mut self, max_iter: u32) -> Self {
    self.max_iter = max_iter;
    self
  }

  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_pfix(mut self, pfix: Vec<DVec2>) -> Self {
    self.pfix = pfix;
    self
  }

  pub fn with_points(mut self, points: Vec<DVec2>) -> Self {
    self.points = Some(points);
    self
  }

  pub fn with_min_edge_length(mut self, min_edge_length: f64) -> Self {
    self.min_edge_length = Some(min_edge_length);
    self
  }

  pub fn with_plot(mut self, cadence: u32) -> Self {
    self.plot = Some(cadence);
    self
  }

  pub fn with_lock_boundary(mut self, lock_boundary: bool) -> Self {
    self.lock_boundary = lock_boundary;
    self
  }

  pub fn with_pseudo_dt(mut self, pseudo_dt: f64) -> Self {
    self.pseudo_dt = pseudo_dt;
    self
  }

  /// Validate `max_iter` and an already-resolved `min_edge_length`.
  pub(crate) fn validate(&self, min_edge_length: f64) -> MeshResult<()> {
    if self.max_iter == 0 {
      return Err(MeshError::InvalidParameter("`max_iter` must be > 0".into()));
    }
    if !(min_edge_length > 0.0) {
      return Err(MeshError::InvalidParameter(
        "`min_edge_length` must be > 0".into(),
      ));
    }
    Ok(())
  }
}

/// Additional options for [`crate::multiscale::generate_multiscale_mesh`]
/// (C7), layered on top of a shared [`MeshOptions`] applied to every
/// sub-domain run.
#[derive(Clone, Debug)]
pub struct BlendOptions {
  pub blend_width: f64,
  pub blend_polynomial: i32,
  pub blend_max_iter: u32,
  pub blend_nnear: usize,
}

impl Default for BlendOptions {
  fn default() -> Self {
    Self {
      blend_width: 2500.0,
      blend_polynomial: 2,
      blend_max_iter: 20,
      blend_nnear: 256,
    }
  }
}

impl BlendOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_blend_width(mut self, blend_width: f64) -> Self {
    self.blend_width = blend_width;
    self
  }

  pub fn with_blend_polynomial(mut self, blend_polynomial: i32) -> Self {
    self.blend_polynomial = blend_polynomial;
    self
  }

  pub fn with_blend_max_iter(mut self, blend_max_iter: u32) -> Self {
    self.blend_max_iter = blend_max_iter;
    self
  }

  pub fn with_blend_nnear(mut self, blend_nnear: usize) -> Self {
    self.blend_nnear = blend_nnear;
    self
  }
}

/// The full set of recognized option keys, for untyped ingestion (e.g.
/// parsing a config file) where a key arriving at the boundary cannot be
/// checked by the type system the way `MeshOptions`'s fields are.
pub const RECOGNIZED_OPTION_KEYS: &[&str] = &[
  "max_iter",
  "seed",
  "pfix",
  "points",
  "bbox",
  "min_edge_length",
  "plot",
  "lock_boundary",
  "pseudo_dt",
  "blend_width",
  "blend_polynomial",
  "blend_max_iter",
  "blend_nnear",
];

/// Reject an option key that is not in [`RECOGNIZED_OPTION_KEYS`].
pub fn check_recognized_option(key: &str) -> MeshResult<()> {
  if RECOGNIZED_OPTION_KEYS.contains(&key) {
    Ok(())
  } else {
    Err(MeshError::UnknownOption(key.to_string()))
  }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
