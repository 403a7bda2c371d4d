//! Point location under perturbation retries.
//!
//! Mapping a physical point back to reference coordinates can fail on
//! poorly conditioned cells even when the point genuinely lies inside.
//! The locator retries the inversion with the query point nudged by a tiny
//! uniform offset, which is usually enough to step the Newton iteration out
//! of its bad starting basin.
//!
//! Retries are independent trials around the *original* query point; a
//! failed trial's perturbation is never compounded. The generator is
//! injected by the caller, so workers of a data-parallel run each own an
//! independently seeded stream and results stay reproducible.

use crate::geometry::mapping::physical_to_reference;
use crate::topology::cell_type::CellType;
use rand::Rng;

/// Retry policy for [`locate_in_cell`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocateConfig {
    /// Retries allowed after the initial attempt.
    pub max_retries: u32,
    /// Half-width of the uniform perturbation applied per coordinate.
    pub perturbation: f64,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            max_retries: 20,
            perturbation: 1e-4,
        }
    }
}

/// Result of a location attempt: the reference coordinates on success,
/// plus the number of inversion attempts actually performed.
#[derive(Clone, Debug, PartialEq)]
pub struct LocateOutcome {
    /// Reference coordinates of the query point, `None` after exhausting
    /// all retries. No approximate coordinate is ever returned on failure.
    pub reference: Option<Vec<f64>>,
    /// Total inversion attempts, counting the initial one.
    pub attempts: u32,
}

impl LocateOutcome {
    /// True iff the inversion produced reference coordinates.
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.reference.is_some()
    }
}

/// Locate `point` inside the cell spanned by `vertices`, retrying the
/// inversion under perturbation.
///
/// Performs at most `1 + config.max_retries` attempts. Each retry rebuilds
/// the trial point as `point[d] + perturbation * U(-1, 1)` per reference
/// coordinate, drawing from `rng`.
pub fn locate_in_cell<R: Rng + ?Sized>(
    point: [f64; 3],
    cell_type: CellType,
    vertices: &[[f64; 3]],
    config: &LocateConfig,
    rng: &mut R,
) -> LocateOutcome {
    let dim = cell_type.dimension() as usize;
    let mut trial = point;
    let mut attempts = 0u32;
    while attempts <= config.max_retries {
        attempts += 1;
        if let Ok(reference) = physical_to_reference(cell_type, vertices, &trial) {
            return LocateOutcome {
                reference: Some(reference),
                attempts,
            };
        }
        for (d, coordinate) in trial.iter_mut().enumerate().take(dim) {
            *coordinate = point[d] + config.perturbation * rng.gen_range(-1.0..=1.0);
        }
    }
    log::debug!(
        "point location failed after {attempts} attempts at ({}, {}, {})",
        point[0],
        point[1],
        point[2]
    );
    LocateOutcome {
        reference: None,
        attempts,
    }
}
