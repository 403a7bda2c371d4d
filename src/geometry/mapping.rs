//! Reference-to-physical mappings for tensor-product cells.
//!
//! Shape functions follow the lexicographic corner numbering documented in
//! [`crate::topology::cell`]: the first reference coordinate varies
//! fastest, the vertical one slowest. All reference cells are unit
//! intervals/squares/cubes, `[0, 1]^dim`.
//!
//! [`physical_to_reference`] is a Newton inversion and *fails* when the
//! Jacobian degenerates or the iteration does not converge; the
//! perturbation-retry point locator in [`crate::geometry::locate`] is built
//! on top of that failure signal.

use crate::geometry::metrics::{dot, norm, sub};
use crate::mesh_error::AquiferMeshError;
use crate::topology::cell_type::CellType;

const EPS: f64 = 1e-12;
const NEWTON_ITERATIONS: usize = 20;
const NEWTON_TOLERANCE: f64 = 1e-10;

/// Shape function values and reference gradients at a reference point.
fn shape_functions(
    cell_type: CellType,
    reference_point: &[f64],
) -> Result<(Vec<f64>, Vec<Vec<f64>>), AquiferMeshError> {
    match cell_type {
        CellType::Segment => {
            if reference_point.len() != 1 {
                return Err(AquiferMeshError::InvalidGeometry(
                    "segment reference point must have 1 component".into(),
                ));
            }
            let r = reference_point[0];
            Ok((vec![1.0 - r, r], vec![vec![-1.0], vec![1.0]]))
        }
        CellType::Quadrilateral => {
            if reference_point.len() != 2 {
                return Err(AquiferMeshError::InvalidGeometry(
                    "quad reference point must have 2 components".into(),
                ));
            }
            let r = reference_point[0];
            let s = reference_point[1];
            let rm = 1.0 - r;
            let sm = 1.0 - s;
            // lexicographic: v0=(0,0), v1=(1,0), v2=(0,1), v3=(1,1)
            let weights = vec![rm * sm, r * sm, rm * s, r * s];
            let grads = vec![
                vec![-sm, -rm],
                vec![sm, -r],
                vec![-s, rm],
                vec![s, r],
            ];
            Ok((weights, grads))
        }
        CellType::Hexahedron => {
            if reference_point.len() != 3 {
                return Err(AquiferMeshError::InvalidGeometry(
                    "hex reference point must have 3 components".into(),
                ));
            }
            let r = reference_point[0];
            let s = reference_point[1];
            let t = reference_point[2];
            let rm = 1.0 - r;
            let sm = 1.0 - s;
            let tm = 1.0 - t;
            // bottom layer v0..v3 in quad order, top layer v4..v7
            let weights = vec![
                rm * sm * tm,
                r * sm * tm,
                rm * s * tm,
                r * s * tm,
                rm * sm * t,
                r * sm * t,
                rm * s * t,
                r * s * t,
            ];
            let grads = vec![
                vec![-sm * tm, -rm * tm, -rm * sm],
                vec![sm * tm, -r * tm, -r * sm],
                vec![-s * tm, rm * tm, -rm * s],
                vec![s * tm, r * tm, -r * s],
                vec![-sm * t, -rm * t, rm * sm],
                vec![sm * t, -r * t, r * sm],
                vec![-s * t, rm * t, rm * s],
                vec![s * t, r * t, r * s],
            ];
            Ok((weights, grads))
        }
        _ => Err(AquiferMeshError::InvalidGeometry(format!(
            "no reference mapping for cell type: {cell_type:?}"
        ))),
    }
}

/// Map a point in reference coordinates to physical coordinates.
pub fn reference_to_physical(
    cell_type: CellType,
    vertices: &[[f64; 3]],
    reference_point: &[f64],
) -> Result<[f64; 3], AquiferMeshError> {
    let (weights, _) = shape_functions(cell_type, reference_point)?;
    if vertices.len() != weights.len() {
        return Err(AquiferMeshError::InvalidGeometry(format!(
            "vertex count mismatch: expected {}, got {}",
            weights.len(),
            vertices.len()
        )));
    }
    let mut out = [0.0; 3];
    for (weight, vertex) in weights.iter().zip(vertices.iter()) {
        out[0] += weight * vertex[0];
        out[1] += weight * vertex[1];
        out[2] += weight * vertex[2];
    }
    Ok(out)
}

/// Compute the Jacobian matrix at a reference point.
///
/// The returned matrix is stored row-major with shape `(3, cell_dim)`.
pub fn jacobian(
    cell_type: CellType,
    vertices: &[[f64; 3]],
    reference_point: &[f64],
) -> Result<Vec<f64>, AquiferMeshError> {
    let (_, grads) = shape_functions(cell_type, reference_point)?;
    if vertices.len() != grads.len() {
        return Err(AquiferMeshError::InvalidGeometry(format!(
            "vertex count mismatch: expected {}, got {}",
            grads.len(),
            vertices.len()
        )));
    }
    let dim = grads.first().map(|g| g.len()).unwrap_or(0);
    let mut out = vec![0.0; 3 * dim];
    for (vertex, grad) in vertices.iter().zip(grads.iter()) {
        for ref_dim in 0..dim {
            out[ref_dim] += vertex[0] * grad[ref_dim];
            out[dim + ref_dim] += vertex[1] * grad[ref_dim];
            out[2 * dim + ref_dim] += vertex[2] * grad[ref_dim];
        }
    }
    Ok(out)
}

/// Pull a physical vector back into reference space via a normal-equations
/// solve against the Jacobian columns.
pub fn pull_back_vector(
    cell_type: CellType,
    vertices: &[[f64; 3]],
    reference_point: &[f64],
    physical_vector: &[f64; 3],
) -> Result<Vec<f64>, AquiferMeshError> {
    let jac = jacobian(cell_type, vertices, reference_point)?;
    let dim = jac.len() / 3;
    if dim == 0 {
        return Ok(Vec::new());
    }
    let cols = jacobian_columns(&jac, dim);
    match dim {
        1 => {
            let col = cols[0];
            let denom = dot(col, col);
            if denom.abs() <= EPS {
                return Err(AquiferMeshError::InvalidGeometry(
                    "degenerate jacobian".into(),
                ));
            }
            Ok(vec![dot(col, *physical_vector) / denom])
        }
        2 => {
            let a = dot(cols[0], cols[0]);
            let b = dot(cols[0], cols[1]);
            let c = dot(cols[1], cols[1]);
            let det = a * c - b * b;
            if det.abs() <= EPS {
                return Err(AquiferMeshError::InvalidGeometry(
                    "degenerate jacobian".into(),
                ));
            }
            let rhs0 = dot(cols[0], *physical_vector);
            let rhs1 = dot(cols[1], *physical_vector);
            let inv_det = 1.0 / det;
            Ok(vec![
                (c * rhs0 - b * rhs1) * inv_det,
                (-b * rhs0 + a * rhs1) * inv_det,
            ])
        }
        3 => {
            let mut mat = [0.0; 9];
            for i in 0..3 {
                for j in 0..3 {
                    mat[i * 3 + j] = dot(cols[i], cols[j]);
                }
            }
            let rhs = [
                dot(cols[0], *physical_vector),
                dot(cols[1], *physical_vector),
                dot(cols[2], *physical_vector),
            ];
            let inv = invert_3x3(mat)?;
            Ok(vec![
                inv[0] * rhs[0] + inv[1] * rhs[1] + inv[2] * rhs[2],
                inv[3] * rhs[0] + inv[4] * rhs[1] + inv[5] * rhs[2],
                inv[6] * rhs[0] + inv[7] * rhs[1] + inv[8] * rhs[2],
            ])
        }
        _ => Err(AquiferMeshError::InvalidGeometry(format!(
            "unsupported reference dimension: {dim}"
        ))),
    }
}

/// Map a physical point back to reference coordinates using Newton
/// iteration from the cell center.
///
/// Unlike the forward map this is fallible in a way callers must expect:
/// a degenerate Jacobian or a residual that does not fall below tolerance
/// within the iteration budget yields `Err`. Tolerance is scaled by the
/// cell extent so large physical cells behave like the unit cell.
pub fn physical_to_reference(
    cell_type: CellType,
    vertices: &[[f64; 3]],
    physical_point: &[f64; 3],
) -> Result<Vec<f64>, AquiferMeshError> {
    let dim = cell_type.dimension() as usize;
    if dim == 0 {
        return Ok(Vec::new());
    }
    let tolerance = NEWTON_TOLERANCE * cell_extent(vertices).max(1.0);
    let mut reference = vec![0.5; dim];
    for _ in 0..NEWTON_ITERATIONS {
        let mapped = reference_to_physical(cell_type, vertices, &reference)?;
        let residual = sub(mapped, *physical_point);
        if norm(residual) <= tolerance {
            return Ok(reference);
        }
        let correction = pull_back_vector(cell_type, vertices, &reference, &residual)?;
        for (r, c) in reference.iter_mut().zip(correction.iter()) {
            *r -= c;
        }
    }
    Err(AquiferMeshError::InvalidGeometry(
        "point inversion did not converge".into(),
    ))
}

fn cell_extent(vertices: &[[f64; 3]]) -> f64 {
    let Some(first) = vertices.first() else {
        return 0.0;
    };
    vertices
        .iter()
        .map(|v| norm(sub(*v, *first)))
        .fold(0.0, f64::max)
}

fn jacobian_columns(jac: &[f64], dim: usize) -> Vec<[f64; 3]> {
    let mut cols = Vec::with_capacity(dim);
    for ref_dim in 0..dim {
        cols.push([jac[ref_dim], jac[dim + ref_dim], jac[2 * dim + ref_dim]]);
    }
    cols
}

fn invert_3x3(mat: [f64; 9]) -> Result<[f64; 9], AquiferMeshError> {
    let det = mat[0] * (mat[4] * mat[8] - mat[5] * mat[7])
        - mat[1] * (mat[3] * mat[8] - mat[5] * mat[6])
        + mat[2] * (mat[3] * mat[7] - mat[4] * mat[6]);
    if det.abs() <= EPS {
        return Err(AquiferMeshError::InvalidGeometry(
            "degenerate jacobian".into(),
        ));
    }
    let inv_det = 1.0 / det;
    Ok([
        (mat[4] * mat[8] - mat[5] * mat[7]) * inv_det,
        (mat[2] * mat[7] - mat[1] * mat[8]) * inv_det,
        (mat[1] * mat[5] - mat[2] * mat[4]) * inv_det,
        (mat[5] * mat[6] - mat[3] * mat[8]) * inv_det,
        (mat[0] * mat[8] - mat[2] * mat[6]) * inv_det,
        (mat[2] * mat[3] - mat[0] * mat[5]) * inv_det,
        (mat[3] * mat[7] - mat[4] * mat[6]) * inv_det,
        (mat[1] * mat[6] - mat[0] * mat[7]) * inv_det,
        (mat[0] * mat[4] - mat[1] * mat[3]) * inv_det,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn unit_quad() -> [[f64; 3]; 4] {
        [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ]
    }

    fn unit_hex() -> [[f64; 3]; 8] {
        [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        ]
    }

    #[test]
    fn quad_corners_map_to_themselves() {
        let vertices = unit_quad();
        for (i, reference) in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
            .iter()
            .enumerate()
        {
            let mapped =
                reference_to_physical(CellType::Quadrilateral, &vertices, reference).unwrap();
            assert!(approx(mapped[0], vertices[i][0]));
            assert!(approx(mapped[1], vertices[i][1]));
        }
    }

    #[test]
    fn hex_center_maps_to_centroid() {
        let vertices = unit_hex();
        let mapped =
            reference_to_physical(CellType::Hexahedron, &vertices, &[0.5, 0.5, 0.5]).unwrap();
        assert!(approx(mapped[0], 0.5));
        assert!(approx(mapped[1], 0.5));
        assert!(approx(mapped[2], 0.5));
    }

    #[test]
    fn identity_jacobian_on_unit_hex() {
        let jac = jacobian(CellType::Hexahedron, &unit_hex(), &[0.2, 0.7, 0.4]).unwrap();
        assert!(approx(jac[0], 1.0));
        assert!(approx(jac[4], 1.0));
        assert!(approx(jac[8], 1.0));
        assert!(approx(jac[1], 0.0));
    }

    #[test]
    fn inversion_roundtrip_on_warped_quad() {
        let vertices = [
            [0.0, 0.0, 0.0],
            [2.0, 0.2, 0.0],
            [-0.3, 1.5, 0.0],
            [2.1, 1.8, 0.0],
        ];
        let reference = [0.3, 0.6];
        let physical =
            reference_to_physical(CellType::Quadrilateral, &vertices, &reference).unwrap();
        let recovered =
            physical_to_reference(CellType::Quadrilateral, &vertices, &physical).unwrap();
        assert!(approx(recovered[0], 0.3));
        assert!(approx(recovered[1], 0.6));
    }

    #[test]
    fn degenerate_cell_fails_to_invert() {
        let vertices = [[1.0, 1.0, 1.0]; 8];
        let err =
            physical_to_reference(CellType::Hexahedron, &vertices, &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, AquiferMeshError::InvalidGeometry(_)));
    }

    #[test]
    fn scaled_cell_converges_with_relative_tolerance() {
        // a 500m x 500m x 40m aquifer block
        let vertices = [
            [0.0, 0.0, 0.0],
            [500.0, 0.0, 0.0],
            [0.0, 500.0, 0.0],
            [500.0, 500.0, 0.0],
            [0.0, 0.0, 40.0],
            [500.0, 0.0, 40.0],
            [0.0, 500.0, 42.0],
            [500.0, 500.0, 45.0],
        ];
        let reference = [0.25, 0.75, 0.5];
        let physical =
            reference_to_physical(CellType::Hexahedron, &vertices, &reference).unwrap();
        let recovered =
            physical_to_reference(CellType::Hexahedron, &vertices, &physical).unwrap();
        for (r, expected) in recovered.iter().zip(reference.iter()) {
            assert!((r - expected).abs() < 1e-6);
        }
    }
}
