use nalgebra::Vector3;

use crate::materials::matte::MatteMaterial;
use crate::scene::World;
use crate::shade_record::ShadeRec;

pub mod matte;

#[derive(Debug, Clone)]
pub enum Material {
    Matte(MatteMaterial),
}

pub trait MaterialTrait {
    fn shade(&self, sr: &ShadeRec, world: &World) -> Vector3<f64>;
}

impl MaterialTrait for Material {
    fn shade(&self, sr: &ShadeRec, world: &World) -> Vector3<f64> {
        match self {
            Material::Matte(x) => x.shade(sr, world),
        }
    }
}
