//! # Pyramid Mesh
//!
//! Procedural generation of stepped ("Egyptian-style") pyramid meshes.
//!
//! ## Architecture
//!
//! ```text
//! PyramidParams (host panel / serde) → validate → build → QuadMesh → host
//!                                                              ↓
//!                                                   triangulate → Mesh (GPU)
//! ```
//!
//! - **Builder**: pure, deterministic `build` from five scalars to a quad mesh
//! - **Layer topology**: named corner slots and the per-step state record
//! - **Params**: bounds checking and clamping in front of the builder
//! - **Registry**: explicit operator registration for host menus
//!
//! ## Usage
//!
//! ```rust
//! use pyramid_mesh::build;
//!
//! let mesh = build(2.0, 0.2, 0.2, 5, true);
//! assert_eq!(mesh.vertex_count(), 40);
//! assert_eq!(mesh.face_count(), 38);
//!
//! let (vertices, faces) = mesh.into_parts();
//! assert_eq!(vertices.len(), 40);
//! assert_eq!(faces[0], [4, 5, 1, 0]);
//! ```

pub mod builder;
pub mod error;
pub mod layer;
pub mod mesh;
pub mod params;
pub mod quad_mesh;
pub mod registry;

pub use builder::{build, build_from_params};
pub use error::MeshError;
pub use layer::{Corner, StepState};
pub use mesh::Mesh;
pub use params::PyramidParams;
pub use quad_mesh::QuadMesh;
pub use registry::{MeshOperator, OperatorRegistry, StepPyramidOperator};
