// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{float_equals, Mat4, Quat, EPSILON};

/// 3D vector used throughout the library.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_direction`] for directions (homogeneous
///   `w = 0`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector with every component set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    fn map2(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.component(0), other.component(0)),
            f(self.component(1), other.component(1)),
            f(self.component(2), other.component(2)),
        )
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a + b)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a - b)
    }

    /// Adds `value` to every component.
    pub fn add_value(&self, value: f32) -> Self {
        Self::new(self.x() + value, self.y() + value, self.z() + value)
    }

    /// Subtracts `value` from every component.
    pub fn sub_value(&self, value: f32) -> Self {
        Self::new(self.x() - value, self.y() - value, self.z() - value)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Component-wise product.
    pub fn multiply(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a * b)
    }

    /// Component-wise quotient. Zero divisors produce non-finite components.
    pub fn divide(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a / b)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }

    /// Component-wise reciprocal.
    pub fn invert(&self) -> Self {
        Self::new(1.0 / self.x(), 1.0 / self.y(), 1.0 / self.z())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Some vector perpendicular to `self`.
    ///
    /// Crosses with the cardinal axis along which `self` is smallest, so the
    /// result is well conditioned. The zero vector maps to zero.
    pub fn perpendicular(&self) -> Self {
        let [x, y, z] = self.data;
        let (ax, ay, az) = (x.abs(), y.abs(), z.abs());
        let axis = if ax <= ay && ax <= az {
            Self::UNIT_X
        } else if ay <= az {
            Self::UNIT_Y
        } else {
            Self::UNIT_Z
        };
        self.cross(&axis)
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

    /// Unsigned angle in radians between two vectors, in `[0, π]`.
    pub fn angle(&self, other: &Self) -> f32 {
        self.cross(other).length().atan2(self.dot(other))
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold (not numeric precision): vectors
    /// with length ≤ `EPSILON` are considered degenerate and normalized to
    /// zero so downstream callers can detect them.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Projection of `self` onto `onto`. Zero when `onto` is zero.
    pub fn project(&self, onto: &Self) -> Self {
        let denom = onto.length_squared();
        if denom == 0.0 {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / denom)
    }

    /// Component of `self` orthogonal to `onto`.
    pub fn reject(&self, onto: &Self) -> Self {
        self.sub(&self.project(onto))
    }

    /// Gram–Schmidt orthonormalisation of a pair.
    ///
    /// Returns `(normalize(v1), normalize(v2 - proj_v1(v2)))`. If `v2` is
    /// parallel to `v1` the second vector degenerates to zero.
    pub fn ortho_normalize(v1: &Self, v2: &Self) -> (Self, Self) {
        let n1 = v1.normalize();
        let n2 = v2.sub(&n1.scale(v2.dot(&n1))).normalize();
        (n1, n2)
    }

    /// Transforms the point `(x, y, z, 1)` by `mat` (translation applied, `w`
    /// dropped without a perspective divide).
    pub fn transform(&self, mat: &Mat4) -> Self {
        mat.transform_point(self)
    }

    /// Rotates the vector by the rotation encoded in `q`.
    ///
    /// Uses `v' = v + w·t + q_v × t` with `t = 2·(q_v × v)`, which matches
    /// `q.to_mat4().transform_direction(v)` for unit `q` without building the
    /// matrix.
    pub fn rotate_by_quaternion(&self, q: &Quat) -> Self {
        let [qx, qy, qz, qw] = q.to_array();
        let u = Self::new(qx, qy, qz);
        let t = u.cross(self).scale(2.0);
        self.add(&t.scale(qw)).add(&u.cross(&t))
    }

    /// Rotates the vector around `axis` by `angle` radians.
    ///
    /// The axis is normalised internally; a zero axis leaves `self` unchanged.
    pub fn rotate_by_axis_angle(&self, axis: &Self, angle: f32) -> Self {
        self.rotate_by_quaternion(&Quat::from_axis_angle(*axis, angle))
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

    /// Refracts the unit direction `self` through a surface with unit
    /// `normal` and index ratio `ratio` (`n1 / n2`).
    ///
    /// Returns the zero vector on total internal reflection.
    pub fn refract(&self, normal: &Self, ratio: f32) -> Self {
        let cos_i = self.dot(normal);
        let k = 1.0 - ratio * ratio * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            return Self::ZERO;
        }
        self.scale(ratio).sub(&normal.scale(ratio * cos_i + k.sqrt()))
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.map2(other, f32::min)
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.map2(other, f32::max)
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

    /// Moves towards `target` by at most `max_distance`.
    pub fn move_towards(&self, target: &Self, max_distance: f32) -> Self {
        let delta = target.sub(self);
        let dist_sq = delta.length_squared();
        if dist_sq == 0.0 || (max_distance >= 0.0 && dist_sq <= max_distance * max_distance) {
            return *target;
        }
        self.add(&delta.scale(max_distance / dist_sq.sqrt()))
    }

    /// Barycentric weights `(u, v, w)` of `p` with respect to triangle
    /// `(a, b, c)`, so that `p ≈ u·a + v·b + w·c` and `u + v + w = 1`.
    ///
    /// `p` is assumed coplanar with the triangle; off-plane points are
    /// projected implicitly by the area method and not validated. A degenerate
    /// (zero-area) triangle yields non-finite weights.
    pub fn barycenter(p: &Self, a: &Self, b: &Self, c: &Self) -> Self {
        let v0 = b.sub(a);
        let v1 = c.sub(a);
        let v2 = p.sub(a);
        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Self::new(1.0 - v - w, v, w)
    }

    /// Maps a normalised-device-coordinate point back to world space.
    ///
    /// Applies the inverse of `projection · view` to `(source, 1)` and divides
    /// by the resulting `w`. Singular camera matrices produce non-finite
    /// output.
    pub fn unproject(source: &Self, projection: &Mat4, view: &Mat4) -> Self {
        let inv = projection.multiply(view).inverse();
        let [x, y, z, w] = inv
            .transform_vec4(&Quat::new(source.x(), source.y(), source.z(), 1.0))
            .to_array();
        Self::new(x / w, y / w, z / w)
    }

    /// Approximate equality using [`float_equals`] on each component.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (0..3).all(|i| float_equals(self.component(i), other.component(i)))
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use prism_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x() / rhs, self.y() / rhs, self.z() / rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
