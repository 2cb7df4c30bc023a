// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::{MathError, Quat, Vec3, EPSILON};

/// Column‑major 4×4 matrix in the right-handed OpenGL convention.
///
/// - Stored in column‑major order to align with GPU uploads: each run of four
///   consecutive scalars is one column, translation lives in the last column.
/// - `a.multiply(&b)` is the standard product `A·B`. Applied to a column
///   vector it runs `B` first, then `A`; every constructor here follows that
///   rule.
///
/// # Examples
/// Basic transformations:
/// ```
/// use prism_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    ///
    /// Column-major layout with ones on the diagonal.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0,    // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about X, then Y, then Z by the components of `angles`
    /// (radians): `R = Rz · Ry · Rx`.
    ///
    /// Matches [`Quat::from_euler`] with the same angles.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use prism_math::{Mat4, Vec3};
    /// // X by 90° sends +Y to +Z, then Z by 90° leaves +Z alone.
    /// let r = Mat4::rotation_xyz(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
    /// let v = r.transform_direction(&Vec3::UNIT_Y);
    /// assert!((v.z() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_xyz(angles: Vec3) -> Self {
        Self::rotation_z(angles.z())
            .multiply(&Self::rotation_y(angles.y()))
            .multiply(&Self::rotation_x(angles.x()))
    }

    /// Rotation about Z, then Y, then X by the components of `angles`
    /// (radians): `R = Rx · Ry · Rz`.
    pub fn rotation_zyx(angles: Vec3) -> Self {
        Self::rotation_x(angles.x())
            .multiply(&Self::rotation_y(angles.y()))
            .multiply(&Self::rotation_z(angles.z()))
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// OpenGL-style perspective frustum from the six clipping planes.
    #[rustfmt::skip]
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fn_ = far - near;
        Self::new([
            2.0 * near / rl, 0.0, 0.0, 0.0,
            0.0, 2.0 * near / tb, 0.0, 0.0,
            (right + left) / rl, (top + bottom) / tb, -(far + near) / fn_, -1.0,
            0.0, 0.0, -(2.0 * far * near) / fn_, 0.0,
        ])
    }

    /// Perspective projection from a vertical field of view (radians), an
    /// aspect ratio (width / height), and the near/far clip distances.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use prism_math::{Mat4, Quat};
    /// let p = Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    /// // A point on the near plane lands at NDC depth -1.
    /// let [_, _, z, w] = p.transform_vec4(&Quat::new(0.0, 0.0, -1.0, 1.0)).to_array();
    /// assert!((z / w + 1.0).abs() < 1e-5);
    /// ```
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (fovy * 0.5).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// OpenGL-style orthographic projection.
    #[rustfmt::skip]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fn_ = far - near;
        Self::new([
            2.0 / rl, 0.0, 0.0, 0.0,
            0.0, 2.0 / tb, 0.0, 0.0,
            0.0, 0.0, -2.0 / fn_, 0.0,
            -(left + right) / rl, -(top + bottom) / tb, -(far + near) / fn_, 1.0,
        ])
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// Basis: `z = normalize(eye - target)` (the camera looks down `-z`),
    /// `x = normalize(up × z)`, `y = z × x`. After the transform `eye` sits at
    /// the origin and `target` lies on the negative Z axis.
    ///
    /// `up` parallel to the view direction collapses `x` to zero and yields a
    /// non-orthonormal basis; callers must avoid that input.
    #[rustfmt::skip]
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let z = eye.sub(target).normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);
        Self::new([
            x.x(), y.x(), z.x(), 0.0,
            x.y(), y.y(), z.y(), 0.0,
            x.z(), y.z(), z.z(), 0.0,
            -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
        ])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Flattens the matrix into 16 floats in column-major order, ready for a
    /// GPU uniform upload. Same layout as [`Mat4::to_array`].
    pub fn to_float16(&self) -> [f32; 16] {
        self.data
    }

    /// Column `idx` as `[x, y, z, w]`, or `None` when `idx > 3`.
    pub fn column(&self, idx: usize) -> Option<[f32; 4]> {
        let start = idx.checked_mul(4)?;
        let col = self.data.get(start..start.checked_add(4)?)?;
        Some([col[0], col[1], col[2], col[3]])
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use prism_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data) {
            *o += r;
        }
        Self::new(out)
    }

    /// Element-wise difference.
    pub fn subtract(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data) {
            *o -= r;
        }
        Self::new(out)
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f32 {
        self.at(0, 0) + self.at(1, 1) + self.at(2, 2) + self.at(3, 3)
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// The twelve 2×2 sub-determinants shared by [`Mat4::determinant`] and
    /// [`Mat4::inverse`]. Layout-agnostic: the same expansion works on the
    /// flat array whether it is read as rows or columns.
    fn minors(&self) -> [f32; 12] {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;
        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Determinant by cofactor expansion.
    pub fn determinant(&self) -> f32 {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// Singular or near-singular input is not detected: the division by a
    /// tiny determinant produces huge or non-finite entries. Check
    /// [`Mat4::determinant`] first, or use [`Mat4::try_inverse`].
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        self.adjugate_scaled(1.0 / det)
    }

    /// Inverse that rejects matrices with `|det| <= EPSILON`.
    ///
    /// The threshold is absolute, so uniformly tiny-but-valid matrices (for
    /// example a scale of 0.01 on every axis) are rejected as well.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= EPSILON {
            debug!(determinant = det, "refusing to invert singular matrix");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(self.adjugate_scaled(1.0 / det))
    }

    fn adjugate_scaled(&self, inv_det: f32) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        Self::new([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (-a01 * b11 + a02 * b10 - a03 * b09) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (-a21 * b05 + a22 * b04 - a23 * b03) * inv_det,
            (-a10 * b11 + a12 * b08 - a13 * b07) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (-a30 * b05 + a32 * b02 - a33 * b01) * inv_det,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (-a00 * b10 + a01 * b08 - a03 * b06) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            (-a20 * b04 + a21 * b02 - a23 * b00) * inv_det,
            (-a10 * b09 + a11 * b07 - a12 * b06) * inv_det,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            (-a30 * b03 + a31 * b01 - a32 * b00) * inv_det,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        ])
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied and the resulting vector is returned
    /// with `w` implicitly equal to `1`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z] = point.to_array();
        let row = |r: usize| self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z + self.at(r, 3);
        Vec3::new(row(0), row(1), row(2))
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        let row = |r: usize| self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z;
        Vec3::new(row(0), row(1), row(2))
    }

    /// Full homogeneous product `M · v` with `v = (x, y, z, w)`.
    pub fn transform_vec4(&self, v: &Quat) -> Quat {
        let c = v.to_array();
        let row = |r: usize| (0..4).map(|k| self.at(r, k) * c[k]).sum::<f32>();
        Quat::new(row(0), row(1), row(2), row(3))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Mat4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}
