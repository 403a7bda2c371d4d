//! # aquifer-mesh
//!
//! aquifer-mesh is the geometry/topology support layer for a parallel
//! finite-element groundwater-flow preprocessing pipeline. It locates
//! physical points inside mesh cells, computes recharge weighting for
//! sloped land-surface faces, resolves vertical adjacency on layered
//! quad/hex reference cells, and extracts deduplicated geometric degrees
//! of freedom from a distributed mesh partition.
//!
//! ## Features
//! - Strong `PointId` handles and tensor-product `Cell`/face tables
//! - Closed-form triangle metrics, 3D or projected onto the XY plane
//! - Newton inversion of the reference mapping with perturbation retries
//! - Constant-table vertical/full corner adjacency lookups
//! - Partition-aware deformation-DoF extraction with compact local ids
//! - Streamline/cell-box records for the external plotting utility
//!
//! ## Determinism
//!
//! All randomized decisions use `SmallRng` generators injected by the
//! caller, so each worker of a data-parallel run owns an independently
//! seeded stream and reruns are reproducible. Unit tests fix seeds
//! explicitly.
//!
//! ## Parallelism
//!
//! Work is data-parallel across worker processes, each owning a disjoint
//! cell partition; within a worker everything is sequential and
//! bounded-time. Nothing in this crate mutates state shared between
//! workers, and reconciliation of partition-boundary nodes is explicitly
//! left to the caller.

pub mod algs;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::deformation_dofs::{
        DeformationDofPoints, DeformationElement, DeformationMesh, DofIndex,
        InMemoryDeformationMesh, Q1VectorElement, extract_deformation_dofs,
    };
    pub use crate::geometry::VertexPositions;
    pub use crate::geometry::locate::{LocateConfig, LocateOutcome, locate_in_cell};
    pub use crate::geometry::mapping::{physical_to_reference, reference_to_physical};
    pub use crate::geometry::metrics::triangle_area;
    pub use crate::geometry::recharge::{recharge_weight, recharge_weight_for_face};
    pub use crate::io::streamlines::{BOX_EDGES, CellBox, Highlight, Streamline};
    pub use crate::mesh_error::AquiferMeshError;
    pub use crate::topology::adjacency::{AdjacencyMode, connected_corners, vertical_neighbor};
    pub use crate::topology::cell::Cell;
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::partition::MeshPartition;
    pub use crate::topology::point::PointId;
}
