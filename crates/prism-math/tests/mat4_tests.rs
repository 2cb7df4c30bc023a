// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use prism_math::{MathError, Mat4, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    const ABS_TOL: f32 = 1e-6;
    const REL_TOL: f32 = 1e-5;
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        let scale = a[i].abs().max(b[i].abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

fn sample() -> Mat4 {
    Mat4::translation(1.0, -2.0, 3.0)
        .multiply(&Mat4::rotation_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.7))
        .multiply(&Mat4::scale(2.0, 0.5, 3.0))
}

#[test]
fn identity_multiply_is_noop() {
    let a = Mat4::from([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 0.0, -1.0, 0.0, // col 1
        0.0, 1.0, 0.0, 0.0, // col 2
        5.0, -3.0, 2.0, 1.0, // col 3
    ]);
    let id = Mat4::identity();
    assert_eq!(a.multiply(&id).to_array(), a.to_array());
    assert_eq!(id.multiply(&a).to_array(), a.to_array());
}

#[test]
fn mat4_mul_operator_matches_method() {
    let s = Mat4::scale(2.0, 3.0, 4.0);
    let r = Mat4::rotation_x(FRAC_PI_4);
    approx_eq16((r * s).to_array(), r.multiply(&s).to_array());
    approx_eq16((s * &r).to_array(), s.multiply(&r).to_array());
}

#[test]
fn mat4_mul_assign_variants_work() {
    let lhs_rot_x = Mat4::rotation_x(FRAC_PI_4);
    let rhs_scale = Mat4::scale(2.0, 3.0, 4.0);
    let expected_owned = (lhs_rot_x * rhs_scale).to_array();
    let mut a = lhs_rot_x;
    a *= rhs_scale;
    approx_eq16(a.to_array(), expected_owned);
    assert_ne!(a.to_array(), lhs_rot_x.to_array());

    let lhs_rot_y = Mat4::rotation_y(FRAC_PI_3);
    let rhs_trans = Mat4::translation(1.0, 2.0, 3.0);
    let expected_borrowed = (lhs_rot_y * rhs_trans).to_array();
    let mut b = lhs_rot_y;
    b *= &rhs_trans;
    approx_eq16(b.to_array(), expected_borrowed);
}

#[test]
fn composition_applies_right_operand_first() {
    // Scale then translate: the translation is not scaled.
    let m = Mat4::translation(10.0, 0.0, 0.0).multiply(&Mat4::scale(2.0, 2.0, 2.0));
    assert_eq!(m.transform_point(&Vec3::UNIT_X).to_array(), [12.0, 0.0, 0.0]);
    // Translate then scale: the translation is scaled too.
    let n = Mat4::scale(2.0, 2.0, 2.0).multiply(&Mat4::translation(10.0, 0.0, 0.0));
    assert_eq!(n.transform_point(&Vec3::UNIT_X).to_array(), [22.0, 0.0, 0.0]);
}

#[test]
fn translation_affects_points_but_not_directions() {
    let t = Mat4::translation(5.0, -3.0, 2.0);
    let p = Vec3::new(2.0, 4.0, -1.0);
    assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
    assert_eq!(t.transform_direction(&p).to_array(), p.to_array());
}

#[test]
fn add_subtract_are_element_wise() {
    let a = Mat4::scale(1.0, 2.0, 3.0);
    let b = Mat4::identity();
    let sum = a + b;
    assert_eq!(sum.trace(), 2.0 + 3.0 + 4.0 + 2.0);
    let diff = a - b;
    assert_eq!(diff.to_array()[5], 1.0);
    assert_eq!(diff.to_array()[15], 0.0);
    assert_eq!(a.add(&b), sum);
    assert_eq!(a.subtract(&b), diff);
}

#[test]
fn determinant_trace_transpose_basics() {
    assert_eq!(Mat4::identity().determinant(), 1.0);
    assert_eq!(Mat4::scale(2.0, 3.0, 4.0).determinant(), 24.0);
    assert_eq!(Mat4::translation(7.0, 8.0, 9.0).determinant(), 1.0);
    assert_eq!(Mat4::scale(2.0, 3.0, 4.0).trace(), 10.0);

    let t = Mat4::translation(1.0, 2.0, 3.0).transpose();
    assert_eq!(t.column(0), Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(t.column(1), Some([0.0, 1.0, 0.0, 2.0]));
    assert_eq!(t.column(3), Some([0.0, 0.0, 0.0, 1.0]));
    assert_eq!(t.column(4), None);
    assert_eq!(t.transpose(), Mat4::translation(1.0, 2.0, 3.0));
}

#[test]
fn rotation_determinant_is_one() {
    let r = Mat4::rotation_xyz(Vec3::new(0.3, -1.2, 2.0));
    assert!((r.determinant() - 1.0).abs() < EPS);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = sample();
    approx_eq16(m.multiply(&m.inverse()).to_array(), Mat4::identity().to_array());
    approx_eq16(m.inverse().multiply(&m).to_array(), Mat4::identity().to_array());
}

#[test]
fn inverse_of_translation_negates_offset() {
    let inv = Mat4::translation(3.0, -4.0, 5.0).inverse();
    assert_eq!(inv.to_array(), Mat4::translation(-3.0, 4.0, -5.0).to_array());
}

#[test]
fn singular_inverse_is_not_guarded() {
    let inv = Mat4::scale(1.0, 0.0, 1.0).inverse();
    assert!(inv.to_array().iter().any(|v| !v.is_finite()));
}

#[test]
fn try_inverse_reports_singular_matrix() {
    let err = Mat4::scale(1.0, 0.0, 1.0).try_inverse();
    assert_eq!(err, Err(MathError::SingularMatrix { determinant: 0.0 }));
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("matrix is singular (determinant 0)".to_owned())
    );

    let ok = sample().try_inverse();
    assert!(ok.is_ok());
}

#[test]
fn rot_z_maps_x_to_y() {
    let y = Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X);
    approx_eq3(y.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn rot_y_maps_z_to_x() {
    let x = Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z);
    approx_eq3(x.to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn rot_x_maps_y_to_z() {
    let z = Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(z.to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn axis_angle_matches_axis_specific_rotation() {
    let aa = Mat4::rotation_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    let ry = Mat4::rotation_y(FRAC_PI_2);
    approx_eq16(aa.to_array(), ry.to_array());
}

#[test]
fn rotation_xyz_applies_x_first() {
    let angles = Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0);
    // +Y --X(90)--> +Z --Y(90)--> +X
    let v = Mat4::rotation_xyz(angles).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(v.to_array(), [1.0, 0.0, 0.0]);
    // Z-first order: +Y --Y(90)--> +Y --X(90)--> +Z
    let w = Mat4::rotation_zyx(angles).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(w.to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn rotation_xyz_matches_quaternion_euler() {
    let (x, y, z) = (0.4, -0.9, 1.7);
    let m = Mat4::rotation_xyz(Vec3::new(x, y, z));
    let q = Quat::from_euler(x, y, z);
    approx_eq16(m.to_array(), Mat4::from_quat(&q).to_array());
}

#[test]
fn ortho_maps_box_corners_to_ndc_cube() {
    let m = Mat4::ortho(-4.0, 4.0, -2.0, 2.0, 1.0, 11.0);
    approx_eq3(
        m.transform_point(&Vec3::new(-4.0, -2.0, -1.0)).to_array(),
        [-1.0, -1.0, -1.0],
    );
    approx_eq3(
        m.transform_point(&Vec3::new(4.0, 2.0, -11.0)).to_array(),
        [1.0, 1.0, 1.0],
    );
}

#[test]
fn frustum_maps_near_and_far_planes() {
    let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
    let project = |p: Vec3| {
        let [x, y, z, w] = m.transform_vec4(&Quat::new(p.x(), p.y(), p.z(), 1.0)).to_array();
        [x / w, y / w, z / w]
    };
    approx_eq3(project(Vec3::new(1.0, 1.0, -1.0)), [1.0, 1.0, -1.0]);
    approx_eq3(project(Vec3::new(-10.0, -10.0, -10.0)), [-1.0, -1.0, 1.0]);
}

#[test]
fn perspective_matches_symmetric_frustum() {
    let p = Mat4::perspective(FRAC_PI_2, 2.0, 1.0, 100.0);
    // tan(45°) = 1 → top = 1, right = 2.
    let f = Mat4::frustum(-2.0, 2.0, -1.0, 1.0, 1.0, 100.0);
    approx_eq16(p.to_array(), f.to_array());
    assert_eq!(p.to_array()[11], -1.0);
}

#[test]
fn look_at_places_eye_at_origin_and_target_on_negative_z() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let target = Vec3::new(-1.0, 0.5, 2.0);
    let view = Mat4::look_at(&eye, &target, &Vec3::UNIT_Y);

    approx_eq3(view.transform_point(&eye).to_array(), [0.0, 0.0, 0.0]);
    let t = view.transform_point(&target);
    let dist = eye.distance(&target);
    approx_eq3(t.to_array(), [0.0, 0.0, -dist]);
    // Orthonormal rotation part.
    assert!((view.determinant() - 1.0).abs() < EPS);
}

#[test]
fn look_at_down_negative_z_is_pure_translation() {
    let view = Mat4::look_at(&Vec3::new(0.0, 0.0, 5.0), &Vec3::ZERO, &Vec3::UNIT_Y);
    approx_eq16(view.to_array(), Mat4::translation(0.0, 0.0, -5.0).to_array());
}

#[test]
fn to_float16_is_column_major_relayout() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    let flat = m.to_float16();
    assert_eq!(flat, m.to_array());
    assert_eq!(&flat[12..15], &[1.0, 2.0, 3.0]);
}

#[test]
fn transform_vec4_respects_w() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    let dir = m.transform_vec4(&Quat::new(1.0, 1.0, 1.0, 0.0));
    assert_eq!(dir.to_array(), [1.0, 1.0, 1.0, 0.0]);
    let point = m.transform_vec4(&Quat::new(1.0, 1.0, 1.0, 2.0));
    assert_eq!(point.to_array(), [3.0, 5.0, 7.0, 2.0]);
}
