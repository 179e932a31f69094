use nalgebra::{Point2, Point3, Vector3};

use crate::renderer::Ray;

/// Depth along +z at which default primary rays start.
pub const DEFAULT_EYE_DEPTH: f64 = 100.0;

/// A position on the view plane, centered on the image center and scaled by
/// the pixel size.
#[derive(Debug, Copy, Clone)]
pub struct CameraSample {
    pub p_view: Point2<f64>,
}

#[derive(Debug, Copy, Clone)]
pub enum Camera {
    Orthographic(OrthographicCamera),
}

pub trait CameraTrait {
    fn generate_ray(&self, sample: CameraSample) -> Ray;
}

impl CameraTrait for Camera {
    fn generate_ray(&self, sample: CameraSample) -> Ray {
        match self {
            Camera::Orthographic(x) => x.generate_ray(sample),
        }
    }
}

/// Axis-aligned orthographic camera: rays start on the view plane and travel
/// straight into the scene along -z.
#[derive(Debug, Copy, Clone)]
pub struct OrthographicCamera {
    pub eye_depth: f64,
}

impl OrthographicCamera {
    pub fn new(eye_depth: f64) -> Self {
        OrthographicCamera { eye_depth }
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        OrthographicCamera::new(DEFAULT_EYE_DEPTH)
    }
}

impl CameraTrait for OrthographicCamera {
    fn generate_ray(&self, sample: CameraSample) -> Ray {
        Ray {
            origin: Point3::new(sample.p_view.x, sample.p_view.y, self.eye_depth),
            direction: -Vector3::z(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point2, Point3, Vector3};

    use super::*;

    #[test]
    fn it_generates_parallel_rays() {
        let camera = OrthographicCamera::default();

        let ray = camera.generate_ray(CameraSample {
            p_view: Point2::new(3.0, -2.0),
        });

        assert_eq!(ray.origin, Point3::new(3.0, -2.0, DEFAULT_EYE_DEPTH));
        assert_relative_eq!(ray.direction, -Vector3::z());

        let other = camera.generate_ray(CameraSample {
            p_view: Point2::new(-40.0, 17.5),
        });

        assert_relative_eq!(other.direction, ray.direction);
    }

    #[test]
    fn it_honors_a_custom_eye_depth() {
        let camera = Camera::Orthographic(OrthographicCamera::new(10.0));

        let ray = camera.generate_ray(CameraSample {
            p_view: Point2::origin(),
        });

        assert_eq!(ray.origin, Point3::new(0.0, 0.0, 10.0));
    }
}
