// src/utils/geometry.rs

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::model::Point3;

/// Euclidean distance between two points.
///
/// NaN and infinite components propagate into the result.
pub fn calculate_distance(p1: Point3, p2: Point3) -> f64 {
    (Vector3::from(p1) - Vector3::from(p2)).norm()
}

/// Calculates angle P1-P2-P3 in degrees
pub fn calculate_angle(p1: Point3, center: Point3, p3: Point3) -> f64 {
    let c = Vector3::from(center);
    let v1 = normalize(Vector3::from(p1) - c);
    let v2 = normalize(Vector3::from(p3) - c);
    v1.dot(&v2).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Calculates torsion (dihedral) angle P1-P2-P3-P4 in degrees
pub fn calculate_dihedral(p1: Point3, p2: Point3, p3: Point3, p4: Point3) -> f64 {
    let b1 = Vector3::from(p2) - Vector3::from(p1);
    let b2 = Vector3::from(p3) - Vector3::from(p2);
    let b3 = Vector3::from(p4) - Vector3::from(p3);

    // Normals of the b1-b2 and b2-b3 planes
    let v = b1.cross(&b2);
    let w = b2.cross(&b3);

    let x = v.dot(&w);
    let y = normalize(b2).dot(&v.cross(&w));

    y.atan2(x).to_degrees()
}

/// Pairwise distances, one row per point. Rows are filled in parallel.
pub fn distance_matrix(points: &[Point3]) -> Vec<Vec<f64>> {
    points
        .par_iter()
        .map(|&a| points.iter().map(|&b| calculate_distance(a, b)).collect())
        .collect()
}

fn normalize(a: Vector3<f64>) -> Vector3<f64> {
    let l = a.norm();
    if l == 0.0 { Vector3::zeros() } else { a / l }
}
