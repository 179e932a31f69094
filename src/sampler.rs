use nalgebra::Point2;
use rand::Rng;
use sobol::params::JoeKuoD6;
use sobol::Sobol;

#[derive(Debug, Copy, Clone)]
pub enum SamplerMethod {
    Random,
    Sobol,
}

impl SamplerMethod {
    pub fn from_str(str: &str) -> Option<SamplerMethod> {
        match str {
            "random" => Some(SamplerMethod::Random),
            "sobol" => Some(SamplerMethod::Sobol),
            _ => Some(SamplerMethod::Random),
        }
    }
}

#[derive(Clone)]
pub enum Sampler {
    Random(RandomSampler),
    Sobol(SobolSampler),
}

impl Sampler {
    pub fn new(method: SamplerMethod) -> Sampler {
        match method {
            SamplerMethod::Random => Sampler::Random(RandomSampler),
            SamplerMethod::Sobol => Sampler::Sobol(SobolSampler::new()),
        }
    }

    /// Next jittered offset within the unit pixel square, components in [0, 1).
    pub fn sample_unit_square(&mut self) -> Point2<f64> {
        match self {
            Sampler::Random(x) => x.sample_unit_square(),
            Sampler::Sobol(x) => x.sample_unit_square(),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RandomSampler;

impl RandomSampler {
    pub fn sample_unit_square(&mut self) -> Point2<f64> {
        let mut rng = rand::rng();

        Point2::new(rng.random::<f64>(), rng.random::<f64>())
    }
}

#[derive(Clone)]
pub struct SobolSampler {
    sobol_2d: Sobol<f64>,
}

impl SobolSampler {
    pub fn new() -> Self {
        let sobol_params = JoeKuoD6::standard();

        SobolSampler {
            sobol_2d: Sobol::<f64>::new(2, &sobol_params),
        }
    }

    pub fn sample_unit_square(&mut self) -> Point2<f64> {
        match self.sobol_2d.next() {
            Some(point) => Point2::new(point[0], point[1]),
            None => Point2::origin(),
        }
    }
}

impl Default for SobolSampler {
    fn default() -> Self {
        SobolSampler::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_samples_inside_the_unit_square() {
        let mut sampler = Sampler::new(SamplerMethod::Random);

        for _ in 0..100 {
            let sample = sampler.sample_unit_square();

            assert!((0.0..1.0).contains(&sample.x));
            assert!((0.0..1.0).contains(&sample.y));
        }
    }

    #[test]
    fn it_generates_a_deterministic_sobol_sequence() {
        let mut a = Sampler::new(SamplerMethod::Sobol);
        let mut b = Sampler::new(SamplerMethod::Sobol);

        for _ in 0..16 {
            let sample_a = a.sample_unit_square();
            let sample_b = b.sample_unit_square();

            assert_eq!(sample_a, sample_b);
            assert!((0.0..1.0).contains(&sample_a.x));
            assert!((0.0..1.0).contains(&sample_a.y));
        }
    }
}
