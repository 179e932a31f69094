use nalgebra::{Point3, Vector3};

use crate::materials::Material;

/// Result of one nearest-hit query.
///
/// `t`, `hit_point`, `local_hit_point`, `normal` and `material` are only
/// meaningful when `hit_an_object` is true.
#[derive(Debug, Clone)]
pub struct ShadeRec<'a> {
    pub hit_an_object: bool,
    pub t: f64,
    pub hit_point: Point3<f64>,
    pub local_hit_point: Point3<f64>,
    pub normal: Vector3<f64>,
    pub material: Option<&'a Material>,
}

impl<'a> ShadeRec<'a> {
    pub fn new() -> ShadeRec<'a> {
        ShadeRec {
            hit_an_object: false,
            t: f64::INFINITY,
            hit_point: Point3::origin(),
            local_hit_point: Point3::origin(),
            normal: Vector3::zeros(),
            material: None,
        }
    }
}

impl Default for ShadeRec<'_> {
    fn default() -> Self {
        ShadeRec::new()
    }
}
