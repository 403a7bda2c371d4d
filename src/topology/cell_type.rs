//! Cell type metadata for mesh elements.
//!
//! Layered aquifer meshes use tensor-product elements only: quadrilaterals
//! for 2D cross-sectional models and hexahedra for full 3D models. The
//! vertical direction is always the last reference coordinate.

/// Element types handled by the geometry and topology utilities.
///
/// The tag is carried on every [`Cell`](crate::topology::cell::Cell) and is
/// also used downstream for display classification.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CellType {
    /// 0D vertex.
    Vertex,
    /// 1D segment/edge (also the facet of a quadrilateral).
    Segment,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
    /// 3D tensor-product cell (hex).
    Hexahedron,
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Vertex
    }
}

impl CellType {
    /// Returns the topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellType::Vertex => 0,
            CellType::Segment => 1,
            CellType::Quadrilateral => 2,
            CellType::Hexahedron => 3,
        }
    }

    /// Number of corner vertices in the reference numbering.
    pub fn vertex_count(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Segment => 2,
            CellType::Quadrilateral => 4,
            CellType::Hexahedron => 8,
        }
    }

    /// Number of boundary facets.
    pub fn face_count(self) -> usize {
        match self {
            CellType::Vertex => 0,
            CellType::Segment => 2,
            CellType::Quadrilateral => 4,
            CellType::Hexahedron => 6,
        }
    }

    /// Number of vertices on each boundary facet.
    pub fn vertices_per_face(self) -> usize {
        match self {
            CellType::Vertex => 0,
            CellType::Segment => 1,
            CellType::Quadrilateral => 2,
            CellType::Hexahedron => 4,
        }
    }
}
