//! Streamline records handed to the external plotting utility.
//!
//! The preprocessing pipeline emits particle paths as ordered point
//! sequences, optionally paired with the wireframe boxes of the cells the
//! path crossed. The plotting tool renders each box from [`BOX_EDGES`]:
//! two 4-cycles (bottom corners 0-3, top corners 4-7) closed by four
//! vertical edges. Replacement renderers must keep this exact wiring.

use crate::mesh_error::AquiferMeshError;

/// Wireframe edge list of a cell box, as corner index pairs.
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Display classification of a cell box.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Highlight {
    /// Plain wireframe.
    #[default]
    Neutral = 0,
    /// First highlight class.
    Primary = 1,
    /// Second highlight class.
    Secondary = 2,
}

impl From<Highlight> for u8 {
    fn from(highlight: Highlight) -> u8 {
        highlight as u8
    }
}

impl TryFrom<u8> for Highlight {
    type Error = AquiferMeshError;

    fn try_from(tag: u8) -> Result<Self, AquiferMeshError> {
        match tag {
            0 => Ok(Highlight::Neutral),
            1 => Ok(Highlight::Primary),
            2 => Ok(Highlight::Secondary),
            other => Err(AquiferMeshError::InvalidGeometry(format!(
                "unknown highlight tag: {other}"
            ))),
        }
    }
}

/// One cell rendered as a wireframe box. Corners 0-3 are the bottom
/// 4-cycle, corners 4-7 the top; the corner order here is the render
/// cycle, not the reference-cell numbering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellBox {
    pub corners: [[f64; 3]; 8],
    pub highlight: Highlight,
}

impl CellBox {
    /// Edge endpoints in render order.
    pub fn edges(&self) -> impl Iterator<Item = ([f64; 3], [f64; 3])> + '_ {
        BOX_EDGES
            .iter()
            .map(|&(a, b)| (self.corners[a], self.corners[b]))
    }
}

/// One particle path: an ordered 3D point sequence with the cell boxes it
/// traversed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Streamline {
    pub points: Vec<[f64; 3]>,
    pub boxes: Vec<CellBox>,
}

impl Streamline {
    /// Start an empty streamline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next point of the path.
    pub fn push_point(&mut self, point: [f64; 3]) {
        self.points.push(point);
    }

    /// Attach a traversed cell box.
    pub fn push_box(&mut self, cell_box: CellBox) {
        self.boxes.push(cell_box);
    }
}
