use nalgebra::{Point3, Rotation3, Unit, Vector3};
use std::f64::consts::PI;

/// Computes the signed dihedral angle of the chain `p1-p2-p3-p4`, in radians.
///
/// The angle is the rotation about the `p2 -> p3` bond between the half-plane
/// containing `p1` and the half-plane containing `p4`. A cis arrangement is 0,
/// trans is π, and the sign is positive for a clockwise rotation of the near
/// bond onto the far bond when viewed along `p2 -> p3` (IUPAC convention).
/// The result lies in (−π, π]. Degenerate (collinear) chains yield 0.
pub fn dihedral_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let b2_norm = b2.norm();
    if b2_norm == 0.0 {
        return 0.0;
    }

    let y = n1.cross(&n2).dot(&b2) / b2_norm;
    let x = n1.dot(&n2);

    wrap_angle(y.atan2(x))
}

/// Computes the bond angle `a-b-c` at `b`, in radians.
pub fn bond_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ba = a - b;
    let bc = c - b;
    let denominator = ba.norm() * bc.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    (ba.dot(&bc) / denominator).clamp(-1.0, 1.0).acos()
}

/// Maps an angle in radians onto (−π, π].
pub fn wrap_angle(radians: f64) -> f64 {
    let wrapped = (radians + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI { wrapped + 2.0 * PI } else { wrapped }
}

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_radians: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_radians)
}

/// Rotates `point` by `angle_radians` about the axis running from `axis_start` to `axis_end`.
pub fn rotate_about_bond(
    point: &Point3<f64>,
    axis_start: &Point3<f64>,
    axis_end: &Point3<f64>,
    angle_radians: f64,
) -> Point3<f64> {
    let rotation = rotation_from_axis_angle(&(axis_end - axis_start), angle_radians);
    axis_start + rotation * (point - axis_start)
}

/// Places a fourth atom `d` from internal coordinates relative to the chain `a-b-c`.
///
/// `d` is bonded to `c` at `bond_length`, forms the angle `b-c-d` equal to
/// `bond_angle_radians`, and the chain `a-b-c-d` has dihedral `torsion_radians`
/// under the same convention as [`dihedral_angle`].
pub fn place_from_internal(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    bond_length: f64,
    bond_angle_radians: f64,
    torsion_radians: f64,
) -> Point3<f64> {
    let bc = (c - b).normalize();
    let n = (b - a).cross(&bc).normalize();
    let m = n.cross(&bc);

    let along = -bond_length * bond_angle_radians.cos();
    let radial = bond_length * bond_angle_radians.sin();

    c + bc * along
        + m * (radial * torsion_radians.cos())
        + n * (radial * torsion_radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn chain_with_torsion(degrees: f64) -> [Point3<f64>; 4] {
        let theta = degrees.to_radians();
        [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.5),
            Point3::new(theta.cos(), theta.sin(), 1.5),
        ]
    }

    fn assert_angle_eq(actual: f64, expected_degrees: f64) {
        let expected = wrap_angle(expected_degrees.to_radians());
        let diff = wrap_angle(actual - expected).abs();
        assert!(
            diff < TOLERANCE,
            "expected {} deg, got {} deg",
            expected_degrees,
            actual.to_degrees()
        );
    }

    #[test]
    fn dihedral_reproduces_known_configurations() {
        for degrees in [0.0, 90.0, -90.0, 45.0, -135.0] {
            let [p1, p2, p3, p4] = chain_with_torsion(degrees);
            assert_angle_eq(dihedral_angle(&p1, &p2, &p3, &p4), degrees);
        }
    }

    #[test]
    fn trans_configuration_maps_to_positive_pi() {
        let [p1, p2, p3, p4] = chain_with_torsion(180.0);
        let angle = dihedral_angle(&p1, &p2, &p3, &p4);
        assert!((angle - PI).abs() < TOLERANCE);
        assert!(angle > 0.0);
    }

    #[test]
    fn dihedral_is_unchanged_by_reversing_the_chain() {
        for degrees in [30.0, -60.0, 120.0] {
            let [p1, p2, p3, p4] = chain_with_torsion(degrees);
            let forward = dihedral_angle(&p1, &p2, &p3, &p4);
            let reversed = dihedral_angle(&p4, &p3, &p2, &p1);
            assert!((forward - reversed).abs() < TOLERANCE);
        }
    }

    #[test]
    fn dihedral_changes_sign_under_mirror_reflection() {
        let mirror = |p: &Point3<f64>| Point3::new(p.x, -p.y, p.z);
        for degrees in [30.0, -60.0, 120.0] {
            let [p1, p2, p3, p4] = chain_with_torsion(degrees);
            let original = dihedral_angle(&p1, &p2, &p3, &p4);
            let mirrored =
                dihedral_angle(&mirror(&p1), &mirror(&p2), &mirror(&p3), &mirror(&p4));
            assert!((original + mirrored).abs() < TOLERANCE);
        }
    }

    #[test]
    fn collinear_chain_yields_zero() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 0.0, 3.0),
        ];
        assert_eq!(
            dihedral_angle(&points[0], &points[1], &points[2], &points[3]),
            0.0
        );
    }

    #[test]
    fn wrap_angle_maps_into_half_open_interval() {
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < TOLERANCE);
        assert!((wrap_angle(-PI) - PI).abs() < TOLERANCE);
        assert!((wrap_angle(2.5 * PI) - 0.5 * PI).abs() < TOLERANCE);
        assert!((wrap_angle(-0.25 * PI) + 0.25 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn bond_angle_of_right_angle() {
        let angle = bond_angle(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::origin(),
            &Point3::new(0.0, 1.0, 0.0),
        );
        assert!((angle - PI / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn rotate_about_bond_advances_the_dihedral() {
        let [p1, p2, p3, p4] = chain_with_torsion(10.0);
        let rotated = rotate_about_bond(&p4, &p2, &p3, 35f64.to_radians());
        assert_angle_eq(dihedral_angle(&p1, &p2, &p3, &rotated), 45.0);
        assert!(((rotated - p3).norm() - (p4 - p3).norm()).abs() < TOLERANCE);
    }

    #[test]
    fn place_from_internal_honours_all_three_coordinates() {
        let a = Point3::new(1.2, 0.3, -0.4);
        let b = Point3::new(0.1, 0.2, 0.0);
        let c = Point3::new(0.0, 1.6, 0.3);
        let d = place_from_internal(&a, &b, &c, 1.53, 111f64.to_radians(), -57f64.to_radians());

        assert!(((d - c).norm() - 1.53).abs() < TOLERANCE);
        assert!((bond_angle(&b, &c, &d) - 111f64.to_radians()).abs() < TOLERANCE);
        assert_angle_eq(dihedral_angle(&a, &b, &c, &d), -57.0);
    }
}
