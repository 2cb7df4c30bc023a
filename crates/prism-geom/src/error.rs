// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by the checked constructors in this crate.
///
/// Collision predicates and ray casts never fail; a miss is reported through
/// their return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A bounding box corner had `min > max` on `axis` (0 = x, 1 = y, 2 = z).
    #[error("invalid bounding box: min > max on axis {axis}")]
    InvertedBounds {
        /// Offending axis index.
        axis: usize,
    },
    /// `BoundingBox::from_points` was called with an empty slice.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,
}
