use crate::sampler::{Sampler, SamplerMethod};

/// Image dimensions, sampling density and display options for one render.
#[derive(Clone)]
pub struct ViewPlane {
    pub width: u32,
    pub height: u32,
    pub pixel_size: f64,
    pub samples: u32,
    gamma: f64,
    inv_gamma: f64,
    pub show_out_of_gamut: bool,
    pub sampler: Sampler,
}

impl ViewPlane {
    pub fn new(width: u32, height: u32) -> ViewPlane {
        ViewPlane {
            width,
            height,
            pixel_size: 1.0,
            samples: 1,
            gamma: 1.0,
            inv_gamma: 1.0,
            show_out_of_gamut: false,
            sampler: Sampler::new(SamplerMethod::Random),
        }
    }

    /// Keeps the cached inverse in sync with the configured gamma.
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
        self.inv_gamma = 1.0 / gamma;
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn inv_gamma(&self) -> f64 {
        self.inv_gamma
    }

    pub fn set_samples(&mut self, samples: u32) {
        self.samples = samples.max(1);
    }

    pub fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }
}
