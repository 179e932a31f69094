use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::lights::LightTrait;
use crate::materials::MaterialTrait;
use crate::scene::World;
use crate::shade_record::ShadeRec;

/// Perfectly diffuse material: an ambient term plus a Lambertian
/// contribution per light.
#[derive(Debug, Clone)]
pub struct MatteMaterial {
    pub cd: Vector3<f64>,
    pub ka: f64,
    pub kd: f64,
}

impl MatteMaterial {
    pub fn new(cd: Vector3<f64>, ka: f64, kd: f64) -> Self {
        MatteMaterial { cd, ka, kd }
    }
}

impl MaterialTrait for MatteMaterial {
    fn shade(&self, sr: &ShadeRec, world: &World) -> Vector3<f64> {
        let mut radiance = (self.cd * self.ka).component_mul(&world.ambient.radiance());

        for light in &world.lights {
            let wi = light.direction(&sr.hit_point);
            let ndotwi = sr.normal.dot(&wi);

            if ndotwi > 0.0 {
                let f = self.cd * self.kd / PI;
                radiance += f.component_mul(&light.radiance(&sr.hit_point)) * ndotwi;
            }
        }

        radiance
    }
}
