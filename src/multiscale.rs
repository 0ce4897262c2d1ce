//! Multi-scale composer (C7): independent per-nest meshing, followed by a
//! locked-boundary blend pass that stitches the nests into one mesh.

use glam::DVec2;

use crate::boundary::EdgeCountBoundaryExtractor;
use crate::domain::{BBox, Domain, SignedDistance};
use crate::error::{MeshError, MeshResult};
use crate::fixer::DefaultMeshFixer;
use crate::options::{BlendOptions, MeshOptions};
use crate::relax::{generate_mesh, generate_mesh_with, CancellationToken, MeshOutput};
use crate::size_field::{GriddedSizeField, SizeField};
use crate::triangulation::DelaunatorTriangulator;

/// One sub-domain ("nest") to be independently meshed before blending.
pub struct Nest<'a> {
  pub domain: Domain<'a>,
  pub fh: &'a dyn SizeField,
}

/// Builds the master and per-nest smoothed size fields (step 1 of C7).
///
/// Construction of an arbitrary multiscale sizing scheme is out of scope
/// for this crate's core (§1); this trait is the boundary, with
/// [`IdwMultiscaleSizing`] shipped as the default implementation.
pub trait MultiscaleSizing {
  fn smooth(&self, nests: &[Nest], opts: &BlendOptions) -> MeshResult<(GriddedSizeField, Vec<GriddedSizeField>)>;
}

/// Default sizing smoother: samples each nest's domain on a regular
/// lattice at its own resolution, then blends samples with
/// inverse-distance weighting, globally for the master field, and
/// band-restricted (only samples within `blend_width` of the nest's bbox)
/// for each per-nest smoothed field.
#[derive(Default, Clone, Copy)]
pub struct IdwMultiscaleSizing;

impl MultiscaleSizing for IdwMultiscaleSizing {
  fn smooth(
    &self,
    nests: &[Nest],
    opts: &BlendOptions,
  ) -> MeshResult<(GriddedSizeField, Vec<GriddedSizeField>)> {
    let mut samples: Vec<(Vec<DVec2>, Vec<f64>)> = Vec::with_capacity(nests.len());
    for nest in nests {
      let spacing = nest.fh.hmin().ok_or(MeshError::UnresolvableSizing)?;
      samples.push(sample_domain(&nest.domain, nest.fh, spacing));
    }

    let mut all_points = Vec::new();
    let mut all_values = Vec::new();
    for (points, values) in &samples {
      all_points.extend_from_slice(points);
      all_values.extend_from_slice(values);
    }
    if all_points.is_empty() {
      return Err(MeshError::EmptyInitialization);
    }
    let master = GriddedSizeField::new(all_points, all_values, opts.blend_nnear, opts.blend_polynomial);

    let mut smoothed = Vec::with_capacity(nests.len());
    for (k, nest) in nests.iter().enumerate() {
      let mut band_points = samples[k].0.clone();
      let mut band_values = samples[k].1.clone();
      for (j, (points, values)) in samples.iter().enumerate() {
        if j == k {
          continue;
        }
        for (&p, &v) in points.iter().zip(values.iter()) {
          if bbox_distance(nest.domain.bbox, p) <= opts.blend_width {
            band_points.push(p);
            band_values.push(v);
          }
        }
      }
      smoothed.push(GriddedSizeField::new(
        band_points,
        band_values,
        opts.blend_nnear,
        opts.blend_polynomial,
      ));
    }

    Ok((master, smoothed))
  }
}

/// Sample `domain` on a regular lattice at `spacing`, keeping interior
/// points and their target edge length under `fh`.
fn sample_domain(domain: &Domain, fh: &dyn SizeField, spacing: f64) -> (Vec<DVec2>, Vec<f64>) {
  let mut lattice = Vec::new();
  let mut x = domain.bbox.x.0;
  while x <= domain.bbox.x.1 + 1e-12 {
    let mut y = domain.bbox.y.0;
    while y <= domain.bbox.y.1 + 1e-12 {
      lattice.push(DVec2::new(x, y));
      y += spacing;
    }
    x += spacing;
  }

  let interior = domain.fd.eval_batch(&lattice);
  let points: Vec<DVec2> = lattice
    .iter()
    .zip(interior.iter())
    .filter(|&(_, &d)| d < 0.0)
    .map(|(&p, _)| p)
    .collect();
  let values = fh.eval_batch(&points);
  (points, values)
}

/// Euclidean distance from `p` to the closest point of `bbox`; zero if
/// `p` is inside it.
fn bbox_distance(bbox: BBox, p: DVec2) -> f64 {
  let dx = (bbox.x.0 - p.x).max(0.0).max(p.x - bbox.x.1);
  let dy = (bbox.y.0 - p.y).max(0.0).max(p.y - bbox.y.1);
  (dx * dx + dy * dy).sqrt()
}

/// Builds the union SDF (step 2 of C7).
///
/// Construction of an arbitrary nested/masked sub-domain scheme is out of
/// scope for this crate's core (§1); this trait is the boundary, with
/// [`PassthroughMultiscaleDomain`] shipped as the default implementation.
pub trait MultiscaleDomain {
  fn union<'a>(&self, nests: &[Nest<'a>]) -> UnionSdf<'a>;
}

/// Default domain composer: each nest supplies its own opaque `fd`
/// already resolved, and this only combines them with `min`; callers
/// wanting an eroded/carved nesting scheme produce that at the
/// `SignedDistance` boundary themselves.
#[derive(Default, Clone, Copy)]
pub struct PassthroughMultiscaleDomain;

impl MultiscaleDomain for PassthroughMultiscaleDomain {
  fn union<'a>(&self, nests: &[Nest<'a>]) -> UnionSdf<'a> {
    UnionSdf::new(nests)
  }
}

/// Union of the nests' own signed distance functions: `min_k fd_k(p)`.
pub struct UnionSdf<'a> {
  fds: Vec<&'a dyn SignedDistance>,
}

impl<'a> UnionSdf<'a> {
  fn new(nests: &[Nest<'a>]) -> Self {
    Self {
      fds: nests.iter().map(|n| n.domain.fd).collect(),
    }
  }
}

impl<'a> SignedDistance for UnionSdf<'a> {
  fn eval_batch(&self, points: &[DVec2]) -> Vec<f64> {
    let mut out = vec![f64::INFINITY; points.len()];
    for fd in &self.fds {
      let values = fd.eval_batch(points);
      for (o, v) in out.iter_mut().zip(values.into_iter()) {
        *o = o.min(v);
      }
    }
    out
  }
}

fn union_bbox(nests: &[Nest]) -> BBox {
  let mut xmin = f64::INFINITY;
  let mut xmax = f64::NEG_INFINITY;
  let mut ymin = f64::INFINITY;
  let mut ymax = f64::NEG_INFINITY;
  for nest in nests {
    xmin = xmin.min(nest.domain.bbox.x.0);
    xmax = xmax.max(nest.domain.bbox.x.1);
    ymin = ymin.min(nest.domain.bbox.y.0);
    ymax = ymax.max(nest.domain.bbox.y.1);
  }
  BBox::new((xmin, xmax), (ymin, ymax))
}

/// Run C6 independently on every nest, then re-run it once more over the
/// union domain with the blended master size field and a locked boundary,
/// stitching the nests into one conforming mesh.
pub fn generate_multiscale_mesh(
  nests: &[Nest],
  base_opts: &MeshOptions,
  blend_opts: &BlendOptions,
) -> MeshResult<MeshOutput> {
  if nests.len() < 2 {
    return Err(MeshError::InvalidParameter(
      "multiscale blending requires at least two nests".into(),
    ));
  }

  let sizing = IdwMultiscaleSizing;
  let (master_field, smoothed_fields) = sizing.smooth(nests, blend_opts)?;

  let mut collected_points = Vec::new();
  let mut global_hmin = f64::INFINITY;

  for (nest, smoothed) in nests.iter().zip(smoothed_fields.iter()) {
    let sub_hmin = smoothed.hmin().ok_or(MeshError::UnresolvableSizing)?;
    let sub_opts = base_opts.clone().with_min_edge_length(sub_hmin);
    let output = generate_mesh(&nest.domain, smoothed, &sub_opts)?;
    collected_points.extend(output.points);
    global_hmin = global_hmin.min(sub_hmin);
  }

  let union_sdf = PassthroughMultiscaleDomain.union(nests);
  let union_domain = Domain::new(union_bbox(nests), &union_sdf);

  let blend_mesh_opts = base_opts
    .clone()
    .with_min_edge_length(global_hmin)
    .with_max_iter(blend_opts.blend_max_iter)
    .with_points(collected_points)
    .with_lock_boundary(true);

  generate_mesh_with(
    &union_domain,
    &master_field,
    &blend_mesh_opts,
    &DelaunatorTriangulator,
    &EdgeCountBoundaryExtractor,
    &DefaultMeshFixer,
    &CancellationToken::new(),
  )
}

#[cfg(test)]
#[path = "multiscale_test.rs"]
mod multiscale_test;
