use nalgebra::{Point3, Vector3};

use crate::lights::point::PointLight;

pub mod ambient;
pub mod point;

#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
}

pub trait LightTrait {
    /// Unit direction from the hit point toward the light.
    fn direction(&self, hit_point: &Point3<f64>) -> Vector3<f64>;
    /// Incident radiance at the hit point.
    fn radiance(&self, hit_point: &Point3<f64>) -> Vector3<f64>;
}

impl LightTrait for Light {
    fn direction(&self, hit_point: &Point3<f64>) -> Vector3<f64> {
        match self {
            Light::Point(x) => x.direction(hit_point),
        }
    }

    fn radiance(&self, hit_point: &Point3<f64>) -> Vector3<f64> {
        match self {
            Light::Point(x) => x.radiance(hit_point),
        }
    }
}
