// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use prism_math::{Mat4, Quat, Vec3};

fn vec3_strategy(range: f32) -> impl Strategy<Value = Vec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn unit_quat_strategy() -> impl Strategy<Value = Quat> {
    (vec3_strategy(1.0), -3.0f32..3.0)
        .prop_filter("axis must not be degenerate", |(axis, _)| axis.length() > 0.1)
        .prop_map(|(axis, angle)| Quat::from_axis_angle(axis, angle))
}

/// Translation · rotation · scale with bounded, non-degenerate scale.
fn trs_strategy() -> impl Strategy<Value = Mat4> {
    (
        vec3_strategy(10.0),
        unit_quat_strategy(),
        (0.5f32..2.0, 0.5f32..2.0, 0.5f32..2.0),
    )
        .prop_map(|(t, q, (sx, sy, sz))| {
            Mat4::translation(t.x(), t.y(), t.z())
                .multiply(&q.to_mat4())
                .multiply(&Mat4::scale(sx, sy, sz))
        })
}

fn max_abs_diff(a: &Mat4, b: &Mat4) -> f32 {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

proptest! {
    #[test]
    fn normalized_vectors_have_unit_length(v in vec3_strategy(100.0)) {
        prop_assume!(v.length() > 1e-3);
        prop_assert!((v.normalize().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn cross_product_is_orthogonal(a in vec3_strategy(10.0), b in vec3_strategy(10.0)) {
        let c = a.cross(&b);
        let scale = a.length() * b.length() * c.length() + 1.0;
        prop_assert!(c.dot(&a).abs() / scale < 1e-4);
        prop_assert!(c.dot(&b).abs() / scale < 1e-4);
    }

    #[test]
    fn identity_is_neutral(m in trs_strategy()) {
        let id = Mat4::identity();
        prop_assert_eq!(m.multiply(&id), m);
        prop_assert_eq!(id.multiply(&m), m);
    }

    #[test]
    fn inverse_round_trips_to_identity(m in trs_strategy()) {
        let product = m.multiply(&m.inverse());
        prop_assert!(max_abs_diff(&product, &Mat4::identity()) < 1e-3);
        let checked = m.try_inverse();
        prop_assert!(checked.is_ok());
    }

    #[test]
    fn determinant_is_multiplicative(a in trs_strategy(), b in trs_strategy()) {
        let lhs = a.multiply(&b).determinant();
        let rhs = a.determinant() * b.determinant();
        prop_assert!((lhs - rhs).abs() <= 1e-3 * rhs.abs().max(1.0));
    }

    #[test]
    fn transpose_is_an_involution(m in trs_strategy()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn quaternion_rotation_matches_matrix(q in unit_quat_strategy(), v in vec3_strategy(5.0)) {
        let by_quat = v.rotate_by_quaternion(&q);
        let by_mat = q.to_mat4().transform_direction(&v);
        prop_assert!(by_quat.sub(&by_mat).length() < 1e-4);
        prop_assert!((by_quat.length() - v.length()).abs() < 1e-4);
    }

    #[test]
    fn slerp_stays_on_unit_sphere(a in unit_quat_strategy(), b in unit_quat_strategy(), t in 0.0f32..1.0) {
        let s = a.slerp(&b, t);
        prop_assert!((s.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_matrix_round_trips_through_quaternion(q in unit_quat_strategy()) {
        let back = Quat::from_mat4(&q.to_mat4());
        prop_assert!((back.dot(&q).abs() - 1.0).abs() < 1e-3);
    }
}
