//! Cells and their reference numbering.
//!
//! Corner numbering is lexicographic in the reference coordinates: the
//! first coordinate varies fastest, the vertical (last) coordinate slowest.
//!
//! - Quadrilateral: `v0=(0,0)`, `v1=(1,0)`, `v2=(0,1)`, `v3=(1,1)`.
//! - Hexahedron: `v0..v3` form the bottom (z=0) layer in quad order,
//!   `v4..v7` the top (z=1) layer.
//!
//! Facets are ordered `-x, +x, -y, +y, -z, +z`, and facet vertices are kept
//! in tensor-product order rather than a cycle. Downstream consumers (the
//! recharge weighting in particular) rely on that ordering.

use crate::mesh_error::AquiferMeshError;
use crate::topology::cell_type::CellType;
use crate::topology::point::PointId;
use itertools::Itertools;

/// Facet table for the reference quadrilateral.
pub const QUAD_FACES: [[usize; 2]; 4] = [[0, 2], [1, 3], [0, 1], [2, 3]];

/// Facet table for the reference hexahedron.
pub const HEX_FACES: [[usize; 4]; 6] = [
    [0, 2, 4, 6],
    [1, 3, 5, 7],
    [0, 1, 4, 5],
    [2, 3, 6, 7],
    [0, 1, 2, 3],
    [4, 5, 6, 7],
];

/// A mesh element: an ordered corner list in reference numbering plus a
/// type tag.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    cell_type: CellType,
    corners: Vec<PointId>,
}

impl Cell {
    /// Build a cell, validating the corner count against the cell type and
    /// rejecting repeated corners.
    pub fn new(cell_type: CellType, corners: Vec<PointId>) -> Result<Self, AquiferMeshError> {
        let expected = cell_type.vertex_count();
        if corners.len() != expected {
            return Err(AquiferMeshError::CornerCountMismatch {
                cell_type,
                expected,
                found: corners.len(),
            });
        }
        if let Some(dup) = corners.iter().duplicates().next() {
            return Err(AquiferMeshError::DuplicateCorner(*dup));
        }
        Ok(Self { cell_type, corners })
    }

    /// The element type tag.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Corner ids in reference numbering.
    #[inline]
    pub fn corners(&self) -> &[PointId] {
        &self.corners
    }

    /// Local facet description as reference corner indices.
    pub fn face_local_indices(
        cell_type: CellType,
        face: usize,
    ) -> Result<&'static [usize], AquiferMeshError> {
        let table: Option<&'static [usize]> = match cell_type {
            CellType::Quadrilateral => QUAD_FACES.get(face).map(|f| f.as_slice()),
            CellType::Hexahedron => HEX_FACES.get(face).map(|f| f.as_slice()),
            _ => None,
        };
        table.ok_or(AquiferMeshError::FaceOutOfRange { cell_type, face })
    }

    /// Corner ids of the facet with index `face`.
    pub fn face_corners(&self, face: usize) -> Result<Vec<PointId>, AquiferMeshError> {
        let local = Self::face_local_indices(self.cell_type, face)?;
        Ok(local.iter().map(|&i| self.corners[i]).collect())
    }

    /// Index of the facet on the positive vertical side (the land surface
    /// for the top layer of an aquifer mesh).
    pub fn top_face(&self) -> usize {
        self.cell_type.face_count().saturating_sub(1)
    }
}
