//! `PointId`: a strong, zero-cost handle for mesh entities
//!
//! Every mesh entity handled by this crate (cell, face, vertex) is
//! represented by a unique, opaque identifier. `PointId` wraps a nonzero
//! `u64` to enforce at compile- and runtime that 0 is reserved as an
//! invalid or sentinel value.
//!
//! This module provides:
//! - A transparent `PointId` newtype around `NonZeroU64` for zero-cost
//!   memory layout guarantees.
//! - Constructors and accessors with safety checks.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing) so `PointId` can be used in maps, sets, and printed easily.

use crate::mesh_error::AquiferMeshError;
use std::{fmt, num::NonZeroU64};

/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`NonZeroU64`) and can be passed across
/// boundaries exactly like a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// # Panics
    ///
    /// Panics if `raw == 0`. We reserve 0 as an invalid or sentinel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use aquifer_mesh::topology::point::PointId;
    /// let p = PointId::new(1);
    /// assert_eq!(p.get(), 1);
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Self {
        PointId(NonZeroU64::new(raw).expect("PointId must be non-zero"))
    }

    /// Fallible constructor for callers that cannot guarantee a nonzero id.
    #[inline]
    pub fn try_new(raw: u64) -> Result<Self, AquiferMeshError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(AquiferMeshError::InvalidPointId)
    }

    /// Returns the inner `u64` value of this `PointId`.
    ///
    /// This is a cheap, const-time getter. Use it when you need to inspect
    /// or print the raw integer, but prefer to work with `PointId` otherwise
    /// for type safety.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Custom `Debug` implementation to display as `PointId(raw_value)`.
impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

/// Custom `Display` implementation to print only the raw integer.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}



#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let p = PointId::new(123);
        let s = serde_json::to_string(&p).unwrap();
        let p2: PointId = serde_json::from_str(&s).unwrap();
        assert_eq!(p2, p);
    }
}
