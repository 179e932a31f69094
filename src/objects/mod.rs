use nalgebra::{Point3, Vector3};

use crate::materials::Material;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;
use crate::renderer::Ray;

pub mod plane;
pub mod sphere;

/// Candidate intersection reported by a single object, before the
/// nearest-hit scan has picked a winner.
#[derive(Debug, Copy, Clone)]
pub struct ObjectHit {
    pub t: f64,
    pub local_hit_point: Point3<f64>,
    pub normal: Vector3<f64>,
}

#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
}

pub trait ObjectTrait {
    /// Nearest self-intersection along the ray, if any.
    fn hit(&self, ray: Ray) -> Option<ObjectHit>;
    fn material(&self) -> &Material;
}

impl ObjectTrait for Object {
    fn hit(&self, ray: Ray) -> Option<ObjectHit> {
        match self {
            Object::Sphere(x) => x.hit(ray),
            Object::Plane(x) => x.hit(ray),
        }
    }

    fn material(&self) -> &Material {
        match self {
            Object::Sphere(x) => x.material(),
            Object::Plane(x) => x.material(),
        }
    }
}
