use nalgebra::{Point3, Vector3};

use crate::materials::Material;
use crate::objects::{ObjectHit, ObjectTrait};
use crate::renderer::Ray;

const K_EPSILON: f64 = 1e-7;

#[derive(Debug, Clone)]
pub struct Plane {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
    pub material: Material,
}

impl Plane {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>, material: Material) -> Self {
        Plane {
            position,
            normal,
            material,
        }
    }
}

impl ObjectTrait for Plane {
    fn hit(&self, ray: Ray) -> Option<ObjectHit> {
        let denom = self.normal.dot(&ray.direction);

        if denom.abs() < 1e-9 {
            return None;
        }

        let v = self.position - ray.origin;
        let t = v.dot(&self.normal) / denom;

        if t < K_EPSILON {
            return None;
        }

        Some(ObjectHit {
            t,
            local_hit_point: ray.origin + ray.direction * t,
            normal: self.normal,
        })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
