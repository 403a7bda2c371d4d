//! Geometry: triangle metrics, reference-cell mappings, point location,
//! and recharge weighting.

pub mod locate;
pub mod mapping;
pub mod metrics;
pub mod recharge;

pub use locate::{LocateConfig, LocateOutcome, locate_in_cell};
pub use mapping::{jacobian, physical_to_reference, pull_back_vector, reference_to_physical};
pub use metrics::triangle_area;
pub use recharge::{recharge_weight, recharge_weight_for_face};

use crate::mesh_error::AquiferMeshError;
use crate::topology::point::PointId;
use std::collections::{BTreeMap, HashMap};

/// Read access to vertex coordinates keyed by point id.
///
/// The mesh itself is owned by an external collaborator; geometry routines
/// only need this narrow view of it.
pub trait VertexPositions {
    /// Physical coordinates of `vertex` (2D meshes pad z with 0).
    fn position(&self, vertex: PointId) -> Result<[f64; 3], AquiferMeshError>;
}

impl VertexPositions for HashMap<PointId, [f64; 3]> {
    fn position(&self, vertex: PointId) -> Result<[f64; 3], AquiferMeshError> {
        self.get(&vertex)
            .copied()
            .ok_or(AquiferMeshError::MissingCoordinates(vertex))
    }
}

impl VertexPositions for BTreeMap<PointId, [f64; 3]> {
    fn position(&self, vertex: PointId) -> Result<[f64; 3], AquiferMeshError> {
        self.get(&vertex)
            .copied()
            .ok_or(AquiferMeshError::MissingCoordinates(vertex))
    }
}
