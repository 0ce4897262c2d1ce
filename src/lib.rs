//! oceanmesh-core: force-based 2D unstructured triangular mesh generation
//! over implicit signed-distance domains.
//!
//! This crate implements the Persson–Strang ("distmesh") relaxation
//! algorithm: a point set is seeded over a domain, repeatedly
//! re-triangulated, and nudged by a truss-of-repulsive-bars force law
//! until it settles into a well-shaped unstructured mesh. Domains and
//! target edge lengths are opaque, batch-evaluated functions ([`domain`],
//! [`size_field`]), so callers can supply anything from a closure to a
//! cached raster lookup.
//!
//! Fixed points are pinned exactly across iterations ([`seeding`]), the
//! external boundary can be locked in place ([`relax`]), and
//! [`multiscale`] composes several independently meshed sub-domains into
//! one conforming mesh via a final locked-boundary blend pass.
//!
//! # Example
//!
//! ```ignore
//! use glam::DVec2;
//! use oceanmesh_core::domain::{BBox, Domain};
//! use oceanmesh_core::options::MeshOptions;
//! use oceanmesh_core::relax::generate_mesh;
//! use oceanmesh_core::size_field::UniformSizeField;
//!
//! let fd = |p: DVec2| p.length() - 1.0;
//! let domain = Domain::new(BBox::new((-1.0, 1.0), (-1.0, 1.0)), &fd);
//! let fh = UniformSizeField::new(0.1);
//! let opts = MeshOptions::default().with_max_iter(30).with_seed(0);
//!
//! let output = generate_mesh(&domain, &fh, &opts).unwrap();
//! println!("{} points, {} triangles", output.points.len(), output.triangles.len());
//! ```

pub mod boundary;
pub mod domain;
pub mod error;
pub mod fixer;
pub mod forces;
pub mod geometry;
pub mod multiscale;
pub mod options;
pub mod projection;
pub mod relax;
pub mod scatter;
pub mod seeding;
pub mod size_field;
pub mod triangulation;

pub use boundary::{BoundaryExtractor, EdgeCountBoundaryExtractor};
pub use domain::{BBox, Domain, SignedDistance};
pub use error::{MeshError, MeshResult};
pub use fixer::{DefaultMeshFixer, FixedMesh, MeshFixer};
pub use multiscale::{
  generate_multiscale_mesh, IdwMultiscaleSizing, MultiscaleDomain, MultiscaleSizing, Nest,
  PassthroughMultiscaleDomain,
};
pub use options::{BlendOptions, MeshOptions};
pub use relax::{generate_mesh, generate_mesh_with, CancellationToken, MeshDiagnostics, MeshOutput};
pub use size_field::{GriddedSizeField, SizeField, UniformSizeField};
pub use triangulation::{DelaunatorTriangulator, DelaunayTriangulator, TriangulationResult};
