// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use approx::assert_abs_diff_eq;
use twist_geom::{GeomError, ParametricLine, Plane, Vec3};

fn plane(x: f64, y: f64, z: f64, d: f64) -> Plane {
    Plane::new(Vec3::new(x, y, z), d).unwrap()
}

#[test]
fn worked_examples_from_the_contract() {
    let diagonal = ParametricLine::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)).unwrap();

    let x0 = plane(1.0, 0.0, 0.0, 0.0);
    let hit = x0.intersect_line(&diagonal).unwrap();
    assert_abs_diff_eq!(hit.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.z, 0.0, epsilon = 1e-12);

    let z1 = plane(0.0, 0.0, 1.0, -1.0);
    let hit = z1.intersect_line(&diagonal).unwrap();
    assert_abs_diff_eq!(hit.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit.z, 1.0, epsilon = 1e-12);
}

#[test]
fn plane_plane_intersection_is_symmetric() {
    let pairs = [
        (plane(1.0, 0.0, 0.0, -0.5), plane(0.0, 1.0, 0.0, 0.25)),
        (plane(1.0, 1.0, 0.0, -1.0), plane(0.0, 1.0, 1.0, -1.0)),
        (plane(0.3, -0.7, 0.2, 0.1), plane(-0.5, 0.1, 0.9, -0.4)),
        (plane(0.0, 0.0, 1.0, -1.0), plane(0.0, 1.0, 0.0, 0.0)),
    ];
    for (a, b) in pairs {
        let ab = a.intersect_plane(&b).unwrap();
        let ba = b.intersect_plane(&a).unwrap();
        // Same line: directions parallel up to sign, and each line's point
        // lies on the other.
        assert!(ab.direction().is_parallel_to(&ba.direction()));
        assert!(ab.contains(&ba.origin()));
        assert!(ba.contains(&ab.origin()));
        // And the line lies in both planes.
        for t in [-1.0, 0.0, 2.0] {
            assert!(a.contains(&ab.point_at(t)));
            assert!(b.contains(&ab.point_at(t)));
        }
    }
}

#[test]
fn parallel_pairs_are_geometric_errors() {
    let a = plane(0.0, 1.0, 0.0, 0.0);
    let b = plane(0.0, -3.0, 0.0, 2.0);
    assert_eq!(a.intersect_plane(&b), Err(GeomError::ParallelPlanes));

    let along = ParametricLine::new(Vec3::new(0.0, 1.0, 0.0), Vec3::UNIT_X).unwrap();
    assert_eq!(a.intersect_line(&along), Err(GeomError::ParallelLinePlane));
}
