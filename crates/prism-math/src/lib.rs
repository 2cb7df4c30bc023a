// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! prism-math: value-type linear algebra for real-time clients.
//!
//! Covers scalar helpers, 2D/3D vectors, column-major 4×4 matrices, and
//! quaternions. Every type is a flat `Copy` value and every operation is a
//! pure function of its inputs.
//!
//! Conventions:
//! - Matrices are column-major, right-handed, OpenGL-style.
//! - `a.multiply(&b)` is the standard product `A·B`: applied to a vector it
//!   runs `B` first, then `A`. Quaternion products follow the same rule.
//! - Angles are radians unless a function name says `degrees`.
//! - Degenerate inputs degrade silently (zero vectors, identity quaternions);
//!   `Mat4::try_inverse` is the only checked path.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod error;
mod mat4;
mod quat;
/// Scalar helpers (clamp, lerp, remap, power-of-two rounding).
pub mod scalar;
mod vec2;
mod vec3;

pub use error::MathError;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{
    clamp, deg_to_rad, float_equals, lerp, next_power_of_two, normalize, rad_to_deg, remap, wrap,
};
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Quaternion dot product above which [`Quat::slerp`] falls back to
/// [`Quat::nlerp`]; `sin(theta)` is too small to divide by past this point.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// `|sin(pitch)|` above which [`Quat::to_euler`] treats the rotation as
/// gimbal locked and folds roll into yaw.
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.999_999;
