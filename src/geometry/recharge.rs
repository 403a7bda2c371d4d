//! Recharge weighting for sloped land-surface faces.
//!
//! Groundwater recharge (precipitation, irrigation return flow) is
//! specified as a rate per unit *projected* horizontal area, but it is
//! integrated over the actual, possibly sloped, top face of an element.
//! The weight returned here is the ratio `projected / actual`, a
//! dimensionless multiplier in `(0, 1]` that corrects the applied rate.
//!
//! Vertical faces are not special-cased: their weight tends to 0, which is
//! the physically correct limit (a vertical face captures no recharge),
//! but callers must tolerate near-zero division artifacts.

use crate::geometry::VertexPositions;
use crate::geometry::metrics::{norm, sub, triangle_area};
use crate::mesh_error::AquiferMeshError;
use crate::topology::cell::Cell;

/// Recharge weight of a facet given its vertices.
///
/// Dispatches on facet arity: 2 vertices for the edge of a 2D cross
/// section, 4 for the quadrilateral face of a hex. The quad is split into
/// the triangles `(v1, v2, v4)` and `(v1, v4, v3)`; adjoining faces use the
/// same diagonal, so the split must not be changed.
///
/// A fully degenerate facet (zero actual extent) returns 0 rather than a
/// 0/0 artifact.
pub fn recharge_weight(face_vertices: &[[f64; 3]]) -> Result<f64, AquiferMeshError> {
    match face_vertices {
        [v1, v2] => {
            let actual = norm(sub(*v2, *v1));
            if actual <= 0.0 {
                return Ok(0.0);
            }
            let projected = (v2[0] - v1[0]).abs();
            Ok(projected / actual)
        }
        [v1, v2, v3, v4] => {
            let actual =
                triangle_area(*v1, *v2, *v4, false) + triangle_area(*v1, *v4, *v3, false);
            if actual <= 0.0 {
                return Ok(0.0);
            }
            let projected =
                triangle_area(*v1, *v2, *v4, true) + triangle_area(*v1, *v4, *v3, true);
            Ok(projected / actual)
        }
        other => Err(AquiferMeshError::InvalidGeometry(format!(
            "recharge facet must have 2 or 4 vertices, got {}",
            other.len()
        ))),
    }
}

/// Recharge weight of facet `face` of `cell`, resolving vertex coordinates
/// through `positions`.
pub fn recharge_weight_for_face<P>(
    cell: &Cell,
    face: usize,
    positions: &P,
) -> Result<f64, AquiferMeshError>
where
    P: VertexPositions + ?Sized,
{
    let corners = cell.face_corners(face)?;
    let mut vertices = Vec::with_capacity(corners.len());
    for corner in corners {
        vertices.push(positions.position(corner)?);
    }
    recharge_weight(&vertices)
}
