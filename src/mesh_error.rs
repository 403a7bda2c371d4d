//! AquiferMeshError: unified error type for aquifer-mesh public APIs
//!
//! This error type is used throughout the aquifer-mesh library to provide
//! robust, non-panicking error handling for all public APIs.

use crate::topology::cell_type::CellType;
use crate::topology::point::PointId;
use thiserror::Error;

/// Unified error type for aquifer-mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AquiferMeshError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// A geometric computation received input it cannot operate on.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A face index outside the reference-cell face table.
    #[error("face index {face} out of range for {cell_type:?}")]
    FaceOutOfRange { cell_type: CellType, face: usize },
    /// A cell was built with the wrong number of corners for its type.
    #[error("{cell_type:?} cell requires {expected} corners, got {found}")]
    CornerCountMismatch {
        cell_type: CellType,
        expected: usize,
        found: usize,
    },
    /// A cell was built with a repeated corner id.
    #[error("cell corner list contains duplicate point `{0}`")]
    DuplicateCorner(PointId),
    /// A mesh collaborator has no cell registered under the given id.
    #[error("no cell registered for point `{0}`")]
    MissingCell(PointId),
    /// A coordinate lookup failed for the given point.
    #[error("no coordinates registered for point `{0}`")]
    MissingCoordinates(PointId),
    /// The per-cell DoF list is shorter than the finite element requires.
    #[error("cell `{cell}`: dof list has length {found}, element requires {expected}")]
    DofCountMismatch {
        cell: PointId,
        expected: usize,
        found: usize,
    },
}
