//! Vertical corner adjacency on the reference quad and hex.
//!
//! Layered aquifer meshes move nodes only along the vertical, so the
//! common query is "which corner sits directly above or below this one on
//! the reference cell". The answer is a fixed property of the reference
//! numbering and is served from constant tables.
//!
//! The full reference-edge graph is also available behind
//! [`AdjacencyMode::All`] for callers that need every edge-connected
//! corner, not just the vertical partner. Vertical mode is the default.

use crate::topology::cell_type::CellType;

/// Which slice of the reference-edge graph a lookup returns.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AdjacencyMode {
    /// Only the corner connected along the vertical reference direction.
    #[default]
    Vertical,
    /// All reference-edge-connected corners.
    All,
}

const QUAD_VERTICAL: [[usize; 1]; 4] = [[2], [3], [0], [1]];
const HEX_VERTICAL: [[usize; 1]; 8] = [[4], [5], [6], [7], [0], [1], [2], [3]];

const QUAD_ALL: [[usize; 2]; 4] = [[1, 2], [0, 3], [0, 3], [1, 2]];
const HEX_ALL: [[usize; 3]; 8] = [
    [1, 2, 4],
    [0, 3, 5],
    [0, 3, 6],
    [1, 2, 7],
    [0, 5, 6],
    [1, 4, 7],
    [2, 4, 7],
    [3, 5, 6],
];

/// Corners connected to `corner` on the reference cell.
///
/// Returns an empty slice for a corner index outside the reference cell or
/// a cell type without a corner adjacency table. Callers rely on that as a
/// safe "no neighbor" answer, so it is a defined contract rather than an
/// error.
pub fn connected_corners(
    corner: usize,
    cell_type: CellType,
    mode: AdjacencyMode,
) -> &'static [usize] {
    let row: Option<&'static [usize]> = match (cell_type, mode) {
        (CellType::Quadrilateral, AdjacencyMode::Vertical) => {
            QUAD_VERTICAL.get(corner).map(|r| r.as_slice())
        }
        (CellType::Quadrilateral, AdjacencyMode::All) => {
            QUAD_ALL.get(corner).map(|r| r.as_slice())
        }
        (CellType::Hexahedron, AdjacencyMode::Vertical) => {
            HEX_VERTICAL.get(corner).map(|r| r.as_slice())
        }
        (CellType::Hexahedron, AdjacencyMode::All) => HEX_ALL.get(corner).map(|r| r.as_slice()),
        _ => None,
    };
    row.unwrap_or(&[])
}

/// The single corner vertically paired with `corner`, if the lookup is
/// defined for this cell type and index.
pub fn vertical_neighbor(corner: usize, cell_type: CellType) -> Option<usize> {
    connected_corners(corner, cell_type, AdjacencyMode::Vertical)
        .first()
        .copied()
}
