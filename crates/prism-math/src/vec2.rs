// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{float_equals, Mat4, Vec3, EPSILON};

/// 2D vector used for screen-space and planar math.
///
/// Components may represent points or directions depending on the calling
/// context. All operations return new values; nothing mutates in place except
/// the compound-assignment operators.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Vector with both components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Adds `value` to every component.
    pub fn add_value(&self, value: f32) -> Self {
        Self::new(self.x() + value, self.y() + value)
    }

    /// Subtracts `value` from every component.
    pub fn sub_value(&self, value: f32) -> Self {
        Self::new(self.x() - value, self.y() - value)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Component-wise product.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Component-wise quotient. Zero divisors produce non-finite components.
    pub fn divide(&self, other: &Self) -> Self {
        Self::new(self.x() / other.x(), self.y() / other.y())
    }

    /// Negates both components.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y())
    }

    /// Component-wise reciprocal.
    pub fn invert(&self) -> Self {
        Self::new(1.0 / self.x(), 1.0 / self.y())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(other, 0)`.
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub(other).length_squared()
    }

    /// Signed angle in radians from `self` to `other`.
    ///
    /// Computed as `atan2(cross, dot)`, so the result lies in `(-π, π]` and is
    /// positive for counter-clockwise turns.
    pub fn angle(&self, other: &Self) -> f32 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Angle in radians of the line `start → end` measured against the X
    /// axis, with Y pointing down (screen space).
    pub fn line_angle(start: &Self, end: &Self) -> f32 {
        -(end.y() - start.y()).atan2(end.x() - start.x())
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Transforms the point `(x, y, 0, 1)` by `mat` and drops `z`/`w`.
    pub fn transform(&self, mat: &Mat4) -> Self {
        let p = mat.transform_point(&Vec3::new(self.x(), self.y(), 0.0));
        Self::new(p.x(), p.y())
    }

    /// Linear interpolation towards `other`; `amount` is not clamped.
    pub fn lerp(&self, other: &Self, amount: f32) -> Self {
        self.add(&other.sub(self).scale(amount))
    }

    /// Reflects the vector about `normal` (`v - 2·dot(v, n)·n`).
    ///
    /// `normal` is expected to be unit length.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Rotates the vector counter-clockwise by `angle` radians.
    pub fn rotate(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x() * c - self.y() * s, self.x() * s + self.y() * c)
    }

    /// Moves towards `target` by at most `max_distance`.
    pub fn move_towards(&self, target: &Self, max_distance: f32) -> Self {
        let delta = target.sub(self);
        let dist_sq = delta.length_squared();
        if dist_sq == 0.0 || (max_distance >= 0.0 && dist_sq <= max_distance * max_distance) {
            return *target;
        }
        self.add(&delta.scale(max_distance / dist_sq.sqrt()))
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Clamps each component into `[min, max]`.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        self.max(min).min(max)
    }

    /// Clamps the vector length into `[min, max]`, keeping its direction.
    pub fn clamp_value(&self, min: f32, max: f32) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= 0.0 {
            return *self;
        }
        let len = len_sq.sqrt();
        if len < min {
            self.scale(min / len)
        } else if len > max {
            self.scale(max / len)
        } else {
            *self
        }
    }

    /// Approximate equality using [`float_equals`] on each component.
    pub fn approx_eq(&self, other: &Self) -> bool {
        float_equals(self.x(), other.x()) && float_equals(self.y(), other.y())
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x() / rhs, self.y() / rhs)
    }
}

impl core::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl core::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec2::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
