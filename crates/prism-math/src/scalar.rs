// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::TAU;

use crate::EPSILON;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Linear interpolation between `start` and `end`; `amount` is not clamped.
pub fn lerp(start: f32, end: f32, amount: f32) -> f32 {
    start + amount * (end - start)
}

/// Maps `value` from `[start, end]` onto `[0, 1]`.
///
/// An empty range (`start == end`) divides by zero and yields a non-finite
/// result.
pub fn normalize(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

/// Maps `value` from the input range onto the output range.
pub fn remap(value: f32, input_start: f32, input_end: f32, output_start: f32, output_end: f32) -> f32 {
    (value - input_start) / (input_end - input_start) * (output_end - output_start) + output_start
}

/// Wraps `value` into the half-open range `[min, max)`.
pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    value - span * ((value - min) / span).floor()
}

/// Approximate equality scaled to the magnitude of the operands.
///
/// Two values match when `|a - b| <= EPSILON * max(1, |a|, |b|)`.
pub fn float_equals(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * 1.0f32.max(a.abs().max(b.abs()))
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Smallest power of two greater than or equal to `value`.
///
/// Returns `Some(1)` for zero and `None` when the result does not fit in a
/// `u32`.
pub fn next_power_of_two(value: u32) -> Option<u32> {
    value.checked_next_power_of_two()
}
