use std::path::Path;

use image::{ImageBuffer, ImageResult, Rgb};
use nalgebra::Vector2;

/// Destination for final 8-bit pixel writes. The sink owns any buffering.
pub trait RenderOutput {
    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8);
}

/// Film backed by an RGB image buffer, exportable as PNG.
pub struct Film {
    pub image_size: Vector2<u32>,
    image_buffer: ImageBuffer<Rgb<u8>, Vec<u8>>,
}

impl Film {
    pub fn new(image_size: Vector2<u32>) -> Film {
        Film {
            image_size,
            image_buffer: ImageBuffer::new(image_size.x, image_size.y),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> &Rgb<u8> {
        self.image_buffer.get_pixel(x, y)
    }

    pub fn write_image<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.image_buffer.save(path)
    }
}

impl RenderOutput for Film {
    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        if x >= self.image_size.x || y >= self.image_size.y {
            return;
        }

        self.image_buffer.put_pixel(x, y, Rgb([r, g, b]));
    }
}
