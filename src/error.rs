//! Error taxonomy for mesh generation.

/// Errors that can abort a `generate_mesh` or `generate_multiscale_mesh` call.
///
/// Validation errors abort the run immediately; no partial mesh is ever
/// returned. Per-iteration numeric anomalies (zero-length edges, all-exterior
/// batches) are repaired locally and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
  /// A parameter was non-positive, malformed, or otherwise out of range.
  #[error("invalid parameter: {0}")]
  InvalidParameter(String),

  /// A configuration key was not in the recognized set.
  #[error("unknown option: {0}")]
  UnknownOption(String),

  /// The initial point set was empty after rejection sampling and the
  /// interior filter.
  #[error("no vertices to mesh with")]
  EmptyInitialization,

  /// `edge_length` resolved to neither a gridded field nor a callable.
  ///
  /// Structurally unreachable through the typed `SizeField` API; retained
  /// for parity with the original's untyped option ingestion.
  #[error("`edge_length` must either be a function or a sizing object")]
  UnresolvableSizing,

  /// `domain` resolved to neither a bundled `Domain` nor a callable.
  ///
  /// Structurally unreachable through the typed `SignedDistance` API;
  /// retained for parity with the original's untyped option ingestion.
  #[error("`domain` must be a function or a signed distance function object")]
  UnresolvableDomain,

  /// The signed distance function rejected a batch because every point in
  /// it lay outside its supported neighborhood. Recovered internally by
  /// falling back to a whole-point-set evaluation; this variant exists so
  /// the fallback path has a name to log against, not to be surfaced.
  #[error("signed distance function rejected an all-exterior batch")]
  ExternalSdfBatchFailure,
}

pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
