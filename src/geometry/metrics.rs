//! Triangle area metrics, 3D or projected onto the XY plane.
//!
//! Recharge arrives as a rate per unit *horizontal* area, while the land
//! surface it falls on is sloped, so the same triangle is measured both
//! ways: in its own plane and as its footprint on the XY plane.
//!
//! No validation is performed. A degenerate (collinear) triangle silently
//! yields area 0; that is documented behavior, not an error.

/// Area of the triangle `(a, b, c)`.
///
/// With `project == true`, the vertices are projected onto the XY plane
/// and the absolute shoelace area of the footprint is returned. Otherwise
/// the exact 3D area is computed as half the norm of `(b-a) x (c-a)`,
/// whose components are the determinant expansions over the (x,y), (x,z)
/// and (y,z) coordinate pairs.
pub fn triangle_area(a: [f64; 3], b: [f64; 3], c: [f64; 3], project: bool) -> f64 {
    if project {
        (0.5 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]))).abs()
    } else {
        0.5 * norm(cross(sub(b, a), sub(c, a)))
    }
}

pub(crate) fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
