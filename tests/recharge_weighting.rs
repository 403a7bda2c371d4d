use aquifer_mesh::prelude::*;
use std::collections::HashMap;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

#[test]
fn sloped_cross_section_edge() {
    // 3-4-5 edge: projected 3, actual 5
    let weight = recharge_weight(&[[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]]).unwrap();
    assert!(approx(weight, 0.6));
}

#[test]
fn degenerate_edge_yields_zero() {
    let v = [7.0, 1.0, 0.0];
    assert!(approx(recharge_weight(&[v, v]).unwrap(), 0.0));
}

#[test]
fn projected_and_exact_triangle_areas_agree_in_plane() {
    let a = [0.0, 0.0, 0.0];
    let b = [1.0, 0.0, 0.0];
    let c = [0.0, 1.0, 0.0];
    assert!(approx(triangle_area(a, b, c, true), 0.5));
    assert!(approx(triangle_area(a, b, c, false), 0.5));
}

#[test]
fn hex_top_face_weight_through_cell_tables() {
    // one-layer hex column, land surface tilted along x
    let cell = Cell::new(CellType::Hexahedron, (1..=8).map(PointId::new).collect()).unwrap();
    let mut positions: HashMap<PointId, [f64; 3]> = HashMap::new();
    let xy = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    for (i, [x, y]) in xy.iter().enumerate() {
        positions.insert(PointId::new(i as u64 + 1), [*x, *y, 0.0]);
        positions.insert(PointId::new(i as u64 + 5), [*x, *y, 10.0 + *x]);
    }
    let weight = recharge_weight_for_face(&cell, cell.top_face(), &positions).unwrap();
    // slope of 1 over a run of 1: cos(45 deg)
    assert!(approx(weight, 1.0 / 2.0f64.sqrt()));
    // the flat bottom face would capture everything
    let bottom = recharge_weight_for_face(&cell, 4, &positions).unwrap();
    assert!(approx(bottom, 1.0));
}

#[test]
fn near_vertical_face_weight_tends_to_zero() {
    let face = [
        [0.0, 0.0, 0.0],
        [1e-9, 0.0, 5.0],
        [0.0, 1.0, 0.0],
        [1e-9, 1.0, 5.0],
    ];
    let weight = recharge_weight(&face).unwrap();
    assert!(weight >= 0.0 && weight < 1e-9);
}
