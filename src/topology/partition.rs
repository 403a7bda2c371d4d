//! Partition ownership for distributed meshes.
//!
//! Each worker in the preprocessing pipeline owns a disjoint subset of
//! cells; cells outside the partition stay visible for topology queries but
//! are never processed by this worker. [`MeshPartition`] records the owning
//! rank per point and answers the `locally owned` predicate for the rank it
//! was built for.

use crate::mesh_error::AquiferMeshError;
use crate::topology::point::PointId;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MeshPartition {
    my_rank: usize,
    owners: Vec<Option<usize>>,
}

impl MeshPartition {
    /// Create an empty partition map for the worker with rank `my_rank`.
    pub fn new(my_rank: usize) -> Self {
        Self {
            my_rank,
            owners: Vec::new(),
        }
    }

    /// Create a partition map sized for `max_id` points up front.
    pub fn with_capacity(my_rank: usize, max_id: usize) -> Self {
        Self {
            my_rank,
            owners: vec![None; max_id],
        }
    }

    /// The rank this partition view belongs to.
    #[inline]
    pub fn my_rank(&self) -> usize {
        self.my_rank
    }

    /// Record that `point` is owned by `owner`.
    pub fn assign(&mut self, point: PointId, owner: usize) -> Result<(), AquiferMeshError> {
        let idx = point
            .get()
            .checked_sub(1)
            .ok_or(AquiferMeshError::InvalidPointId)? as usize;
        if idx >= self.owners.len() {
            self.owners.resize(idx + 1, None);
        }
        self.owners[idx] = Some(owner);
        Ok(())
    }

    /// Owning rank of `point`, if recorded.
    pub fn owner_of(&self, point: PointId) -> Option<usize> {
        let idx = (point.get() - 1) as usize;
        self.owners.get(idx).copied().flatten()
    }

    /// True iff `point` belongs to this worker's partition.
    ///
    /// Unrecorded points are not owned by anyone, so they answer `false`.
    pub fn is_locally_owned(&self, point: PointId) -> bool {
        self.owner_of(point) == Some(self.my_rank)
    }

    /// Points recorded as owned by this worker, in id order.
    pub fn owned_points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter(move |(_, owner)| **owner == Some(self.my_rank))
            .map(|(idx, _)| PointId::new(idx as u64 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_and_query() {
        let mut partition = MeshPartition::new(1);
        partition.assign(PointId::new(3), 1).unwrap();
        partition.assign(PointId::new(5), 0).unwrap();
        assert!(partition.is_locally_owned(PointId::new(3)));
        assert!(!partition.is_locally_owned(PointId::new(5)));
        assert!(!partition.is_locally_owned(PointId::new(4)));
        assert_eq!(partition.owner_of(PointId::new(5)), Some(0));
        assert_eq!(partition.owner_of(PointId::new(99)), None);
    }

    #[test]
    fn owned_points_are_ordered() {
        let mut partition = MeshPartition::with_capacity(2, 8);
        partition.assign(PointId::new(7), 2).unwrap();
        partition.assign(PointId::new(2), 2).unwrap();
        partition.assign(PointId::new(4), 1).unwrap();
        let owned: Vec<_> = partition.owned_points().collect();
        assert_eq!(owned, vec![PointId::new(2), PointId::new(7)]);
    }
}
