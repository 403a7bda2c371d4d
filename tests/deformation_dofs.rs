use aquifer_mesh::prelude::*;

/// Two unit quads side by side sharing the edge between them.
///
/// Node layout (vertex ids / per-node dofs, components interleaved):
///
/// ```text
/// v3(4,5) --- v4(6,7) --- v6(10,11)
///   |    A      |     B      |
/// v1(0,1) --- v2(2,3) --- v5(8,9)
/// ```
fn two_quad_mesh() -> InMemoryDeformationMesh {
    let mut mesh = InMemoryDeformationMesh::default();
    let coords = [
        (1, [0.0, 0.0]),
        (2, [1.0, 0.0]),
        (3, [0.0, 1.0]),
        (4, [1.0, 1.0]),
        (5, [2.0, 0.0]),
        (6, [2.0, 1.0]),
    ];
    for (id, [x, y]) in coords {
        mesh.insert_vertex(PointId::new(id), [x, y, 0.0]);
    }
    let quad = |ids: [u64; 4]| {
        Cell::new(
            CellType::Quadrilateral,
            ids.iter().map(|&i| PointId::new(i)).collect(),
        )
        .unwrap()
    };
    mesh.insert_cell(
        PointId::new(100),
        quad([1, 2, 3, 4]),
        vec![0, 1, 2, 3, 4, 5, 6, 7],
    );
    mesh.insert_cell(
        PointId::new(101),
        quad([2, 5, 4, 6]),
        vec![2, 3, 8, 9, 6, 7, 10, 11],
    );
    mesh
}

#[test]
fn shared_nodes_are_deduplicated() {
    let mesh = two_quad_mesh();
    let element = Q1VectorElement::new(CellType::Quadrilateral).unwrap();
    let mut partition = MeshPartition::new(0);
    partition.assign(PointId::new(100), 0).unwrap();
    partition.assign(PointId::new(101), 0).unwrap();

    let extracted = extract_deformation_dofs(&mesh, &element, &partition).unwrap();

    // 6 distinct vertical dofs, not the 8 (cell, node) pairs visited
    assert_eq!(extracted.len(), 6);
    // shared edge nodes resolve to the ids assigned during the first cell
    assert_eq!(extracted.compact_id(3), Some(1));
    assert_eq!(extracted.compact_id(7), Some(3));
    let expected: Vec<(PointId, Vec<usize>)> = vec![
        (PointId::new(100), vec![0, 1, 2, 3]),
        (PointId::new(101), vec![1, 4, 3, 5]),
    ];
    assert_eq!(extracted.cells(), expected.as_slice());
    // first sighting pinned the coordinates
    assert_eq!(extracted.point(1), Some([1.0, 0.0, 0.0]));
    assert_eq!(extracted.point(4), Some([2.0, 0.0, 0.0]));
    assert_eq!(extracted.point(5), Some([2.0, 1.0, 0.0]));
}

#[test]
fn compact_ids_follow_traversal_order() {
    let mesh = two_quad_mesh();
    let element = Q1VectorElement::new(CellType::Quadrilateral).unwrap();
    let mut partition = MeshPartition::new(0);
    partition.assign(PointId::new(100), 0).unwrap();
    partition.assign(PointId::new(101), 0).unwrap();

    let first = extract_deformation_dofs(&mesh, &element, &partition).unwrap();
    let second = extract_deformation_dofs(&mesh, &element, &partition).unwrap();
    let ids = |e: &DeformationDofPoints| e.points().collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn cells_of_other_workers_are_skipped() {
    let mesh = two_quad_mesh();
    let element = Q1VectorElement::new(CellType::Quadrilateral).unwrap();
    let mut partition = MeshPartition::new(0);
    partition.assign(PointId::new(100), 0).unwrap();
    partition.assign(PointId::new(101), 1).unwrap();

    let extracted = extract_deformation_dofs(&mesh, &element, &partition).unwrap();
    assert_eq!(extracted.len(), 4);
    assert_eq!(extracted.cells().len(), 1);
    // the neighbor's private nodes were never visited
    assert_eq!(extracted.compact_id(9), None);
    assert_eq!(extracted.compact_id(11), None);
}

#[test]
fn stacked_hexes_share_the_interface_layer() {
    // two hexes stacked vertically: the middle node layer appears in both
    // cells but must be catalogued once
    let mut mesh = InMemoryDeformationMesh::default();
    for layer in 0..3u64 {
        for (i, [x, y]) in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
            .iter()
            .enumerate()
        {
            let id = layer * 4 + i as u64 + 1;
            mesh.insert_vertex(PointId::new(id), [*x, *y, layer as f64]);
        }
    }
    let hex = |first: u64| {
        Cell::new(
            CellType::Hexahedron,
            (first..first + 8).map(PointId::new).collect(),
        )
        .unwrap()
    };
    // per-node dofs follow vertex ids: node id n has dofs (3n, 3n+1, 3n+2)
    let dofs = |first: u64| -> Vec<DofIndex> {
        (first..first + 8)
            .flat_map(|n| [3 * n, 3 * n + 1, 3 * n + 2])
            .collect()
    };
    mesh.insert_cell(PointId::new(50), hex(1), dofs(1));
    mesh.insert_cell(PointId::new(51), hex(5), dofs(5));

    let element = Q1VectorElement::new(CellType::Hexahedron).unwrap();
    let mut partition = MeshPartition::new(3);
    partition.assign(PointId::new(50), 3).unwrap();
    partition.assign(PointId::new(51), 3).unwrap();

    let extracted = extract_deformation_dofs(&mesh, &element, &partition).unwrap();
    // 12 distinct nodes across three layers, not 16 visits
    assert_eq!(extracted.len(), 12);
    for (compact, point) in extracted.points() {
        // ids were assigned bottom-up layer by layer
        let expected_layer = (compact / 4) as f64;
        assert_eq!(point[2], expected_layer);
    }
}
