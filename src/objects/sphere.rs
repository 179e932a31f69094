use nalgebra::Point3;

use crate::materials::Material;
use crate::objects::{ObjectHit, ObjectTrait};
use crate::renderer::Ray;

const K_EPSILON: f64 = 0.0001;

#[derive(Debug, Clone)]
pub struct Sphere {
    pub position: Point3<f64>,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(position: Point3<f64>, radius: f64, material: Material) -> Self {
        Sphere {
            position,
            radius,
            material,
        }
    }
}

impl ObjectTrait for Sphere {
    fn hit(&self, ray: Ray) -> Option<ObjectHit> {
        let ray_to_sphere_center = ray.origin - self.position;
        let a = ray.direction.dot(&ray.direction);
        let b = ray_to_sphere_center.dot(&ray.direction);
        let c = ray_to_sphere_center.dot(&ray_to_sphere_center) - self.radius * self.radius;
        let discriminant = b * b - a * c;

        if discriminant < 0.0 {
            return None;
        }

        // try the near root first, fall back to the far one
        for t in [
            (-b - discriminant.sqrt()) / a,
            (-b + discriminant.sqrt()) / a,
        ] {
            if t > K_EPSILON {
                let contact_point = ray.origin + ray.direction * t;

                return Some(ObjectHit {
                    t,
                    local_hit_point: contact_point,
                    normal: (contact_point - self.position).normalize(),
                });
            }
        }

        None
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
