// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The geoprim developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use geoprim::algebra::{Matrix4, Quaternion, Vector3, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(rng: &mut StdRng) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
    )
}

fn random_unit_quaternion(rng: &mut StdRng) -> Quaternion<f64> {
    let axis = random_vector(rng).normalized_safe();
    let axis = if axis == Vector3::zero() {
        Vector3::up()
    } else {
        axis
    };
    Quaternion::angle_axis(rng.random_range(-3.0..3.0), &axis)
}

#[test]
fn random_matrices_invert_cleanly() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    while checked < 50 {
        let m = Matrix4::from_cols(
            Vector4::from_vector3(&random_vector(&mut rng), rng.random_range(-1.0..1.0)),
            Vector4::from_vector3(&random_vector(&mut rng), rng.random_range(-1.0..1.0)),
            Vector4::from_vector3(&random_vector(&mut rng), rng.random_range(-1.0..1.0)),
            Vector4::from_vector3(&random_vector(&mut rng), rng.random_range(-1.0..1.0)),
        );
        let Some(inv) = m.inversed() else {
            continue;
        };
        let id = inv * m;
        let expected: Matrix4<f64> = Matrix4::identity();
        for c in 0..4 {
            for r in 0..4 {
                assert!((id[c][r] - expected[c][r]).abs() < 1e-6);
            }
        }
        checked += 1;
    }
}

#[test]
fn determinant_matches_inverse_existence() {
    let singular = Matrix4::<f64>::new(
        1.0, 2.0, 3.0, 4.0,
        2.0, 4.0, 6.0, 8.0,
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    assert!(singular.determinant().abs() < 1e-12);
    assert!(singular.inversed().is_none());
}

#[test]
fn slerp_hits_both_endpoints() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let a = random_unit_quaternion(&mut rng);
        let b = random_unit_quaternion(&mut rng);

        let start = a.slerp(&b, 0.0);
        let end = a.slerp(&b, 1.0);
        // Compare as rotations: q and -q are the same rotation.
        assert!((start.dot(&a).abs() - 1.0).abs() < 1e-6);
        assert!((end.dot(&b).abs() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn slerp_preserves_unit_length() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let a = random_unit_quaternion(&mut rng);
        let b = random_unit_quaternion(&mut rng);
        let t = rng.random_range(0.0..1.0);
        assert!((a.slerp(&b, t).length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn quaternion_rotation_matches_matrix_rotation() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let q = random_unit_quaternion(&mut rng);
        let v = random_vector(&mut rng);
        let by_quat = q.rotate(&v);
        let by_matrix = Matrix4::rotate(&q).transformed_vector(&v);
        assert!((by_quat - by_matrix).sq_length() < 1e-10);
    }
}

#[test]
fn from_to_rotates_first_onto_second() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let from = random_vector(&mut rng).normalized_safe();
        let to = random_vector(&mut rng).normalized_safe();
        if from == Vector3::zero() || to == Vector3::zero() {
            continue;
        }
        let q = Quaternion::from_to(&from, &to);
        assert!((q.rotate(&from) - to).sq_length() < 1e-8);
    }
}

#[test]
fn euler_angles_round_trip() {
    let euler = Vector3::<f64>::new(0.3, -0.6, 1.1);
    let q = Quaternion::from_euler_rads(&euler);
    let back = Quaternion::from_euler_rads(&q.euler_angles());
    assert!((q.dot(&back).abs() - 1.0).abs() < 1e-6);
}

#[test]
fn reflection_preserves_length_and_flips_normal_component() {
    let v = Vector3::<f64>::new(1.0, -2.0, 0.5);
    let n = Vector3::up();
    let r = v.reflected(&n);
    assert!((r.length() - v.length()).abs() < 1e-12);
    assert!((r.dot(&n) + v.dot(&n)).abs() < 1e-12);
}
