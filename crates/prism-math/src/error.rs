// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by the checked math entry points.
///
/// The unchecked operations never fail; they degrade instead (see the crate
/// docs). Only callers that opt into a `try_*` variant see these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix determinant is within [`crate::EPSILON`] of zero.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that triggered the rejection.
        determinant: f32,
    },
}
