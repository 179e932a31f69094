use nalgebra::{Point3, Vector3};

use crate::lights::LightTrait;
use crate::maths::distance_squared;

/// Point light with inverse-square falloff.
#[derive(Debug, Clone)]
pub struct PointLight {
    position: Point3<f64>,
    intensity: Vector3<f64>,
}

impl PointLight {
    pub fn new(position: Point3<f64>, intensity: Vector3<f64>) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl LightTrait for PointLight {
    fn direction(&self, hit_point: &Point3<f64>) -> Vector3<f64> {
        (self.position - hit_point).normalize()
    }

    fn radiance(&self, hit_point: &Point3<f64>) -> Vector3<f64> {
        self.intensity / distance_squared(&self.position, hit_point)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    use super::*;

    #[test]
    fn it_points_from_the_hit_toward_the_light() {
        let light = PointLight::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(1.0, 1.0, 1.0));

        let direction = light.direction(&Point3::origin());

        assert_relative_eq!(direction, Vector3::y());
    }

    #[test]
    fn it_falls_off_with_the_square_of_the_distance() {
        let light = PointLight::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(8.0, 8.0, 8.0));

        let radiance = light.radiance(&Point3::origin());

        assert_relative_eq!(radiance, Vector3::new(2.0, 2.0, 2.0));
    }
}
