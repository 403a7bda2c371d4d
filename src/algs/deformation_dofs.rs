//! Extraction of mesh-deformation degrees of freedom.
//!
//! The free-surface iteration of the flow solver moves mesh nodes along
//! the vertical only, so every column of nodes is represented by the
//! degree of freedom of its vertical component. This pass walks the cells
//! a worker owns, derives the physical support point of every
//! deformation-field node, and assigns compact sequential local ids keyed
//! by the vertical-component DoF index, skipping nodes already seen.
//!
//! The traversal is a single sequential pass in mesh-iteration order, so
//! the compact ids are a deterministic function of that order. Nodes held
//! redundantly by two workers at a partition boundary are *not* reconciled
//! here; that is left to a later exchange pass outside this crate.

use crate::geometry::VertexPositions;
use crate::geometry::mapping::reference_to_physical;
use crate::mesh_error::AquiferMeshError;
use crate::topology::cell::Cell;
use crate::topology::cell_type::CellType;
use crate::topology::partition::MeshPartition;
use crate::topology::point::PointId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Global index of one unknown in the discretized field, assigned by the
/// external finite-element numbering collaborator.
pub type DofIndex = u64;

/// Mesh collaborator view needed by the extraction pass.
///
/// Implementations must iterate cells in a stable mesh order; compact id
/// assignment follows that order and reruns must reproduce it.
pub trait DeformationMesh: VertexPositions {
    /// All cell ids visible to this worker, in mesh-iteration order.
    fn cell_ids(&self) -> Vec<PointId>;

    /// Cell lookup.
    fn cell(&self, id: PointId) -> Result<&Cell, AquiferMeshError>;

    /// Per-cell global DoF indices in system ordering.
    fn cell_dof_indices(&self, id: PointId) -> Result<Vec<DofIndex>, AquiferMeshError>;
}

/// Finite-element collaborator view: the vector-valued deformation element
/// on the reference cell.
pub trait DeformationElement {
    /// Scalar nodes per cell (corner nodes for a Q1 element).
    fn nodes_per_cell(&self) -> usize;

    /// Spatial components of the deformation field.
    fn components(&self) -> usize;

    /// Reference-cell support point of `node` (unused trailing entries 0).
    fn unit_support_point(&self, node: usize) -> [f64; 3];

    /// Index of `(component, node)` within the per-cell system DoF list.
    fn component_to_system_index(&self, component: usize, node: usize) -> usize;
}

/// The vector-valued Q1 element with components interleaved per node, the
/// layout the deformation field uses on quad and hex meshes.
#[derive(Clone, Copy, Debug)]
pub struct Q1VectorElement {
    cell_type: CellType,
}

impl Q1VectorElement {
    /// Build the element for a quad or hex cell.
    pub fn new(cell_type: CellType) -> Result<Self, AquiferMeshError> {
        match cell_type {
            CellType::Quadrilateral | CellType::Hexahedron => Ok(Self { cell_type }),
            other => Err(AquiferMeshError::InvalidGeometry(format!(
                "no deformation element for cell type: {other:?}"
            ))),
        }
    }
}

impl DeformationElement for Q1VectorElement {
    fn nodes_per_cell(&self) -> usize {
        self.cell_type.vertex_count()
    }

    fn components(&self) -> usize {
        self.cell_type.dimension() as usize
    }

    fn unit_support_point(&self, node: usize) -> [f64; 3] {
        // lexicographic corner: bit d of the node index is coordinate d
        [
            (node & 1) as f64,
            ((node >> 1) & 1) as f64,
            ((node >> 2) & 1) as f64,
        ]
    }

    fn component_to_system_index(&self, component: usize, node: usize) -> usize {
        node * self.components() + component
    }
}

/// Compact, deduplicated deformation-node catalogue for one worker.
///
/// Compact ids are dense and sequential in first-sighting order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DeformationDofPoints {
    points: Vec<[f64; 3]>,
    compact_by_vertical_dof: HashMap<DofIndex, usize>,
    cells: Vec<(PointId, Vec<usize>)>,
}

impl DeformationDofPoints {
    /// Number of distinct deformation nodes seen by this worker.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True iff no owned cell contributed a node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Support-point coordinates of a compact id.
    pub fn point(&self, compact: usize) -> Option<[f64; 3]> {
        self.points.get(compact).copied()
    }

    /// All `(compact id, coordinates)` pairs in id order.
    pub fn points(&self) -> impl Iterator<Item = (usize, [f64; 3])> + '_ {
        self.points.iter().copied().enumerate()
    }

    /// Compact id assigned to a vertical-component DoF index, if seen.
    pub fn compact_id(&self, vertical_dof: DofIndex) -> Option<usize> {
        self.compact_by_vertical_dof.get(&vertical_dof).copied()
    }

    /// Per owned cell, its nodes as compact ids, in traversal order.
    pub fn cells(&self) -> &[(PointId, Vec<usize>)] {
        &self.cells
    }
}

/// Walk the cells owned by `partition` and build the compact deformation
/// node catalogue.
///
/// For every node of every owned cell the per-component global DoF indices
/// are gathered through `element`; the vertical-component index is the
/// dedup key. The first sighting assigns the next sequential compact id
/// and records the physical support point (the node's unit support point
/// pushed through the cell mapping); later sightings are skipped without
/// updating the stored coordinate.
pub fn extract_deformation_dofs<M, E>(
    mesh: &M,
    element: &E,
    partition: &MeshPartition,
) -> Result<DeformationDofPoints, AquiferMeshError>
where
    M: DeformationMesh + ?Sized,
    E: DeformationElement + ?Sized,
{
    let dim = element.components();
    if dim == 0 {
        return Err(AquiferMeshError::InvalidGeometry(
            "deformation element has no components".into(),
        ));
    }
    let mut out = DeformationDofPoints::default();
    for cell_id in mesh.cell_ids() {
        if !partition.is_locally_owned(cell_id) {
            continue;
        }
        let cell = mesh.cell(cell_id)?;
        let system_dofs = mesh.cell_dof_indices(cell_id)?;
        let expected = element.nodes_per_cell() * dim;
        if system_dofs.len() < expected {
            return Err(AquiferMeshError::DofCountMismatch {
                cell: cell_id,
                expected,
                found: system_dofs.len(),
            });
        }
        let mut vertices = Vec::with_capacity(cell.corners().len());
        for &corner in cell.corners() {
            vertices.push(mesh.position(corner)?);
        }
        let mut cell_nodes = Vec::with_capacity(element.nodes_per_cell());
        for node in 0..element.nodes_per_cell() {
            let unit = element.unit_support_point(node);
            let position = reference_to_physical(cell.cell_type(), &vertices, &unit[..dim])?;
            let mut node_dofs = Vec::with_capacity(dim);
            for component in 0..dim {
                let system_index = element.component_to_system_index(component, node);
                let dof = system_dofs.get(system_index).copied().ok_or(
                    AquiferMeshError::DofCountMismatch {
                        cell: cell_id,
                        expected: system_index + 1,
                        found: system_dofs.len(),
                    },
                )?;
                node_dofs.push(dof);
            }
            let vertical_dof = node_dofs[dim - 1];
            let compact = match out.compact_by_vertical_dof.entry(vertical_dof) {
                Entry::Occupied(seen) => *seen.get(),
                Entry::Vacant(slot) => {
                    let id = out.points.len();
                    out.points.push(position);
                    slot.insert(id);
                    id
                }
            };
            cell_nodes.push(compact);
        }
        out.cells.push((cell_id, cell_nodes));
    }
    Ok(out)
}

/// In-memory mesh backing for the extraction pass, mirroring what the
/// external triangulation/DoF handler pair provides.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDeformationMesh {
    order: Vec<PointId>,
    cells: HashMap<PointId, Cell>,
    dofs: HashMap<PointId, Vec<DofIndex>>,
    positions: HashMap<PointId, [f64; 3]>,
}

impl InMemoryDeformationMesh {
    /// Register a vertex with its physical coordinates.
    pub fn insert_vertex(&mut self, id: PointId, position: [f64; 3]) {
        self.positions.insert(id, position);
    }

    /// Register a cell and its system DoF list, appended to the traversal
    /// order on first insertion.
    pub fn insert_cell(&mut self, id: PointId, cell: Cell, dofs: Vec<DofIndex>) {
        if !self.cells.contains_key(&id) {
            self.order.push(id);
        }
        self.cells.insert(id, cell);
        self.dofs.insert(id, dofs);
    }
}

impl VertexPositions for InMemoryDeformationMesh {
    fn position(&self, vertex: PointId) -> Result<[f64; 3], AquiferMeshError> {
        self.positions
            .get(&vertex)
            .copied()
            .ok_or(AquiferMeshError::MissingCoordinates(vertex))
    }
}

impl DeformationMesh for InMemoryDeformationMesh {
    fn cell_ids(&self) -> Vec<PointId> {
        self.order.clone()
    }

    fn cell(&self, id: PointId) -> Result<&Cell, AquiferMeshError> {
        self.cells.get(&id).ok_or(AquiferMeshError::MissingCell(id))
    }

    fn cell_dof_indices(&self, id: PointId) -> Result<Vec<DofIndex>, AquiferMeshError> {
        self.dofs
            .get(&id)
            .cloned()
            .ok_or(AquiferMeshError::MissingCell(id))
    }
}
