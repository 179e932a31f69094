//! World space positions are `Point3<f64>`, free directions are
//! `Vector3<f64>`. The two are deliberately distinct types: a translation
//! moves a point but leaves a direction untouched, and two positions can
//! never be added, only subtracted into a displacement.

use nalgebra::{Matrix4, Point3, Vector3};

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

pub fn distance_squared(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance_squared(a, b)
}

/// Applies an affine transform to a position, translation included.
pub fn transform_point(matrix: &Matrix4<f64>, point: &Point3<f64>) -> Point3<f64> {
    matrix.transform_point(point)
}

/// Applies an affine transform to a direction, ignoring translation.
pub fn transform_vector(matrix: &Matrix4<f64>, vector: &Vector3<f64>) -> Vector3<f64> {
    matrix.transform_vector(vector)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Matrix4, Point3, Vector3};

    use super::*;

    #[test]
    fn it_measures_distance_symmetrically() {
        let p = Point3::new(1.5, -2.0, 4.25);
        let q = Point3::new(-3.0, 0.5, 7.75);

        assert_eq!(distance_squared(&p, &q), distance_squared(&q, &p));
        assert_eq!(distance(&p, &q), distance(&q, &p));
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn it_matches_the_sum_of_squared_differences() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 3.0);

        assert_eq!(distance_squared(&p, &q), 9.0 + 16.0);
        assert_relative_eq!(distance(&p, &q), 5.0);
    }

    #[test]
    fn it_round_trips_point_plus_vector() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(0.5, 0.25, -0.75);

        assert_eq!((p + v) - p, v);
    }

    #[test]
    fn it_translates_points_but_not_vectors() {
        let translation = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        let p = Point3::new(0.5, 0.5, 0.5);
        let v = Vector3::new(0.5, 0.5, 0.5);

        assert_eq!(transform_point(&translation, &p), p + Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(transform_vector(&translation, &v), v);
    }
}
