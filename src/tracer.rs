use nalgebra::Vector3;

use crate::materials::MaterialTrait;
use crate::renderer::Ray;
use crate::scene::World;

#[derive(Debug, Clone)]
pub enum Tracer {
    RayCast(RayCast),
}

pub trait TracerTrait {
    fn trace_ray(&self, world: &World, ray: Ray) -> Vector3<f64>;
}

impl TracerTrait for Tracer {
    fn trace_ray(&self, world: &World, ray: Ray) -> Vector3<f64> {
        match self {
            Tracer::RayCast(x) => x.trace_ray(world, ray),
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Tracer::RayCast(RayCast)
    }
}

/// Single-bounce tracer: shades the nearest hit, returns the background
/// color on a miss.
#[derive(Debug, Copy, Clone, Default)]
pub struct RayCast;

impl TracerTrait for RayCast {
    fn trace_ray(&self, world: &World, ray: Ray) -> Vector3<f64> {
        let sr = world.hit_objects(ray);

        match sr.material {
            Some(material) if sr.hit_an_object => material.shade(&sr, world),
            _ => world.background_color,
        }
    }
}
