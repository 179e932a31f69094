use nalgebra::Vector3;
use num_traits::clamp;

/// Clamp each channel independently to [0, 1].
pub fn clamp_to_color(color: Vector3<f64>) -> Vector3<f64> {
    color.map(|channel| clamp(channel, 0.0, 1.0))
}

/// Bring an out-of-gamut color back into range by dividing all channels by
/// the largest one, desaturating toward white instead of shifting hue.
pub fn max_to_one(color: Vector3<f64>) -> Vector3<f64> {
    let max = color.x.max(color.y.max(color.z));

    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Channel-wise power, used for gamma correction.
pub fn powc(color: Vector3<f64>, exponent: f64) -> Vector3<f64> {
    color.map(|channel| channel.powf(exponent))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn it_clamps_each_channel() {
        let clamped = clamp_to_color(Vector3::new(1.5, -0.2, 0.5));

        assert_eq!(clamped, Vector3::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn it_scales_by_the_max_channel() {
        let mapped = max_to_one(Vector3::new(2.0, 1.0, 0.5));

        assert_eq!(mapped, Vector3::new(1.0, 0.5, 0.25));

        // in-gamut colors pass through untouched
        let in_gamut = Vector3::new(0.3, 0.9, 1.0);
        assert_eq!(max_to_one(in_gamut), in_gamut);
    }

    #[test]
    fn it_raises_channels_to_a_power() {
        let corrected = powc(Vector3::new(0.25, 1.0, 0.0), 0.5);

        assert_relative_eq!(corrected.x, 0.5);
        assert_relative_eq!(corrected.y, 1.0);
        assert_relative_eq!(corrected.z, 0.0);
    }
}
