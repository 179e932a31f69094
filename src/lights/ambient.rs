use nalgebra::Vector3;

/// Constant background illumination applied to every shaded point.
#[derive(Debug, Copy, Clone)]
pub struct AmbientLight {
    pub ls: f64,
    pub color: Vector3<f64>,
}

impl AmbientLight {
    pub fn new(ls: f64, color: Vector3<f64>) -> Self {
        AmbientLight { ls, color }
    }

    pub fn radiance(&self) -> Vector3<f64> {
        self.ls * self.color
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        AmbientLight::new(1.0, Vector3::new(1.0, 1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn it_scales_its_color_by_intensity() {
        let ambient = AmbientLight::new(0.5, Vector3::new(1.0, 0.5, 0.25));

        assert_eq!(ambient.radiance(), Vector3::new(0.5, 0.25, 0.125));
    }
}
