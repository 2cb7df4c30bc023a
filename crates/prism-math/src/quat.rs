// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::{FRAC_PI_2, PI};

use tracing::trace;

use crate::{rad_to_deg, wrap, Mat4, Vec3, EPSILON, GIMBAL_LOCK_THRESHOLD, SLERP_LINEAR_THRESHOLD};

/// Quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation helpers (`to_mat4`, `to_euler`, `Vec3::rotate_by_quaternion`)
///   expect unit quaternions; anything else adds scale/skew.
/// * The type doubles as the library's 4-component vector, e.g. for
///   [`Mat4::transform_vec4`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X (vector part) component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y (vector part) component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z (vector part) component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W (scalar part) component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()), f(self.w()))
    }

    fn map2(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
            f(self.w(), other.w()),
        )
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON` to
    /// avoid undefined orientations.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Shortest-arc rotation taking `from` onto `to`. Both inputs must be unit
    /// vectors.
    ///
    /// Opposite vectors have no unique shortest arc; the construction then
    /// collapses to zero and normalises to the identity.
    pub fn from_vec3_to_vec3(from: &Vec3, to: &Vec3) -> Self {
        let cos2theta = from.dot(to);
        let axis = from.cross(to);
        Self::new(axis.x(), axis.y(), axis.z(), 1.0 + cos2theta).normalize()
    }

    /// Rotation about X, then Y, then Z (radians).
    ///
    /// Naming: `x` is roll, `y` is pitch, `z` is yaw. Equivalent to
    /// `qz * qy * qx` and to [`Mat4::rotation_xyz`] with the same angles.
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        let (sx, cx) = (x * 0.5).sin_cos();
        let (sy, cy) = (y * 0.5).sin_cos();
        let (sz, cz) = (z * 0.5).sin_cos();
        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Extracts a rotation quaternion from the upper 3×3 of `mat`.
    ///
    /// Picks the branch driven by the largest of `w², x², y², z²` (read off
    /// the diagonal) so the square root never sees a small, cancellation-prone
    /// argument. `mat` should be a pure rotation.
    pub fn from_mat4(mat: &Mat4) -> Self {
        let (m00, m11, m22) = (mat.at(0, 0), mat.at(1, 1), mat.at(2, 2));
        let candidates = [
            m00 + m11 + m22,
            m00 - m11 - m22,
            m11 - m00 - m22,
            m22 - m00 - m11,
        ];
        let mut biggest = 0;
        for (idx, value) in candidates.iter().enumerate().skip(1) {
            if *value > candidates[biggest] {
                biggest = idx;
            }
        }
        let big = (candidates[biggest] + 1.0).sqrt() * 0.5;
        let mult = 0.25 / big;

        let zy = mat.at(2, 1);
        let yz = mat.at(1, 2);
        let xz = mat.at(0, 2);
        let zx = mat.at(2, 0);
        let yx = mat.at(1, 0);
        let xy = mat.at(0, 1);

        match biggest {
            0 => Self::new((zy - yz) * mult, (xz - zx) * mult, (yx - xy) * mult, big),
            1 => Self::new(big, (yx + xy) * mult, (xz + zx) * mult, (zy - yz) * mult),
            2 => Self::new((yx + xy) * mult, big, (zy + yz) * mult, (xz - zx) * mult),
            _ => Self::new((xz + zx) * mult, (zy + yz) * mult, big, (yx - xy) * mult),
        }
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a - b)
    }

    /// Adds `value` to every component.
    pub fn add_value(&self, value: f32) -> Self {
        self.map(|c| c + value)
    }

    /// Subtracts `value` from every component.
    pub fn sub_value(&self, value: f32) -> Self {
        self.map(|c| c - value)
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|c| c * scalar)
    }

    /// Component-wise quotient.
    pub fn divide(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a / b)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        (0..4).map(|i| self.component(i) * other.component(i)).sum()
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters and matches [`Mat4::multiply`]: rotating a vector
    /// by `a.multiply(&b)` applies `b` first, then `a`. Quaternion
    /// multiplication is non‑commutative.
    ///
    /// Inputs need not be normalized; when both operands are unit quaternions
    /// the result remains a unit quaternion up to floating‑point error
    /// (consider re‑normalizing over long chains).
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use prism_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// let composed = yaw.multiply(&pitch); // pitch first, then yaw
    /// let other = pitch.multiply(&yaw);
    /// assert_ne!(composed.to_array(), other.to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Normalises the quaternion; returns identity when norm is ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        self.scale(1.0 / len)
    }

    /// Negated vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse: the conjugate divided by the squared norm.
    ///
    /// Correct for non-unit input as well. The zero quaternion has no inverse
    /// and is returned unchanged.
    pub fn invert(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return *self;
        }
        self.conjugate().scale(1.0 / len_sq)
    }

    /// Component-wise linear interpolation. The result is generally not unit
    /// length.
    pub fn lerp(&self, other: &Self, amount: f32) -> Self {
        self.map2(other, |a, b| a + amount * (b - a))
    }

    /// Normalised linear interpolation.
    pub fn nlerp(&self, other: &Self, amount: f32) -> Self {
        self.lerp(other, amount).normalize()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// If `dot(self, other) < 0`, `other` is negated first (`q` and `-q`
    /// encode the same rotation). When the corrected dot exceeds
    /// [`SLERP_LINEAR_THRESHOLD`] the angle is too small for a stable
    /// `sin(theta)` denominator and [`Quat::nlerp`] is used instead.
    pub fn slerp(&self, other: &Self, amount: f32) -> Self {
        let mut end = *other;
        let mut cos_theta = self.dot(other);
        if cos_theta < 0.0 {
            end = end.scale(-1.0);
            cos_theta = -cos_theta;
        }

        if cos_theta > SLERP_LINEAR_THRESHOLD {
            trace!(cos_theta, "slerp falling back to nlerp");
            return self.nlerp(&end, amount);
        }

        let theta = cos_theta.acos();
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let ratio_a = ((1.0 - amount) * theta).sin() / sin_theta;
        let ratio_b = (amount * theta).sin() / sin_theta;
        self.scale(ratio_a).add(&end.scale(ratio_b))
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    ///
    /// The quaternion is normalised first.
    pub fn to_mat4(&self) -> Mat4 {
        let [x, y, z, w] = self.normalize().to_array();

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Decomposes a rotation into `(axis, angle)`, angle in `[0, 2π]`.
    ///
    /// For a (near) identity rotation the axis is undefined and
    /// [`Vec3::UNIT_X`] is returned with the computed angle.
    pub fn to_axis_angle(&self) -> (Vec3, f32) {
        let q = if self.w().abs() > 1.0 {
            self.normalize()
        } else {
            *self
        };
        let angle = 2.0 * q.w().clamp(-1.0, 1.0).acos();
        let sin_half = (1.0 - q.w() * q.w()).max(0.0).sqrt();
        if sin_half <= EPSILON {
            trace!(angle, "axis undefined for identity rotation; using +X");
            return (Vec3::UNIT_X, angle);
        }
        let axis = Vec3::new(q.x(), q.y(), q.z()).scale(1.0 / sin_half);
        (axis, angle)
    }

    /// Euler angles `(x, y, z)` in radians, inverse of [`Quat::from_euler`].
    ///
    /// Pitch (`y`) is in `[-π/2, π/2]`. Near ±90° pitch the decomposition is
    /// not unique (gimbal lock): once `|sin(pitch)|` exceeds
    /// [`GIMBAL_LOCK_THRESHOLD`], roll is pinned to zero and the whole twist
    /// is reported as yaw. Only that one representative is returned.
    pub fn to_euler(&self) -> Vec3 {
        let [x, y, z, w] = self.data;
        let sin_pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0);

        if sin_pitch.abs() > GIMBAL_LOCK_THRESHOLD {
            trace!(sin_pitch, "gimbal lock: folding roll into yaw");
            let pitch = FRAC_PI_2.copysign(sin_pitch);
            let yaw = wrap(2.0 * z.atan2(w), -PI, PI);
            return Vec3::new(0.0, pitch, yaw);
        }

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = sin_pitch.asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vec3::new(roll, pitch, yaw)
    }

    /// [`Quat::to_euler`] converted to degrees.
    pub fn to_euler_degrees(&self) -> Vec3 {
        let e = self.to_euler();
        Vec3::new(rad_to_deg(e.x()), rad_to_deg(e.y()), rad_to_deg(e.z()))
    }

    /// Applies `mat` to the quaternion read as a plain 4-vector.
    ///
    /// This is linear algebra, not rotation composition.
    pub fn transform(&self, mat: &Mat4) -> Self {
        mat.transform_vec4(self)
    }

    /// Approximate equality that treats `q` and `-q` as the same rotation.
    pub fn approx_eq(&self, other: &Self) -> bool {
        let close = |sign: f32| {
            (0..4).all(|i| crate::float_equals(self.component(i), sign * other.component(i)))
        };
        close(1.0) || close(-1.0)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced by this
/// conversion.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Quat::add(&self, &rhs)
    }
}

impl core::ops::Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Quat::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
