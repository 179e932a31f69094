use indicatif::ProgressBar;
use log::{info, warn};
use nalgebra::{Point2, Vector3};

use crate::camera::{Camera, CameraSample, CameraTrait, OrthographicCamera};
use crate::film::RenderOutput;
use crate::helpers::{clamp_to_color, max_to_one, powc};
use crate::lights::ambient::AmbientLight;
use crate::lights::Light;
use crate::objects::{Object, ObjectTrait};
use crate::renderer::{Ray, STATS};
use crate::shade_record::ShadeRec;
use crate::tracer::{Tracer, TracerTrait};
use crate::view_plane::ViewPlane;

/// The scene container: owns the geometry, the lights, the tracer and the
/// output sink, and drives the per-pixel render loop.
pub struct World {
    pub view_plane: ViewPlane,
    pub background_color: Vector3<f64>,
    pub ambient: AmbientLight,
    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
    pub tracer: Tracer,
    pub camera: Option<Camera>,
    output: Option<Box<dyn RenderOutput>>,
}

impl World {
    pub fn new(view_plane: ViewPlane) -> World {
        World {
            view_plane,
            background_color: Vector3::zeros(),
            ambient: AmbientLight::default(),
            objects: vec![],
            lights: vec![],
            tracer: Tracer::default(),
            camera: None,
            output: None,
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Takes ownership of the sink; a previously held sink is released.
    pub fn set_render_output(&mut self, output: Box<dyn RenderOutput>) {
        self.output = Some(output);
    }

    pub fn take_render_output(&mut self) -> Option<Box<dyn RenderOutput>> {
        self.output.take()
    }

    /// Scans every object in list order and keeps the closest intersection.
    ///
    /// A candidate only wins with a `t` strictly below the running minimum,
    /// so equal distances keep the earlier-scanned object.
    pub fn hit_objects(&self, ray: Ray) -> ShadeRec {
        let mut sr = ShadeRec::new();
        let mut tmin = f64::INFINITY;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray) {
                if hit.t < tmin {
                    tmin = hit.t;
                    sr.hit_an_object = true;
                    sr.material = Some(object.material());
                    sr.hit_point = ray.origin + ray.direction * hit.t;
                    sr.normal = hit.normal;
                    sr.local_hit_point = hit.local_hit_point;
                }
            }
        }

        if sr.hit_an_object {
            sr.t = tmin;
        }

        sr
    }

    /// Renders the whole image: top-to-bottom rows in internal coordinates,
    /// one accumulated and averaged color per pixel.
    pub fn render_scene(&mut self) {
        let width = self.view_plane.width;
        let height = self.view_plane.height;
        let size = self.view_plane.pixel_size;
        let samples = self.view_plane.samples.max(1);

        if self.output.is_none() {
            warn!("no render output set, pixel writes will be discarded");
        }

        info!(
            "start render, w{} px, h{} px, {} samples per pixel",
            width, height, samples
        );

        let mut sampler = self.view_plane.sampler.clone();
        let tracer = self.tracer.clone();
        let default_camera = OrthographicCamera::default();
        let bar = ProgressBar::new(height as u64);

        for row in 0..height {
            for column in 0..width {
                let mut pixel_color = Vector3::zeros();

                for _ in 0..samples {
                    let sp = sampler.sample_unit_square();
                    let sample = CameraSample {
                        p_view: Point2::new(
                            size * (column as f64 - 0.5 * width as f64 + sp.x),
                            size * (row as f64 - 0.5 * height as f64 + sp.y),
                        ),
                    };

                    let ray = match &self.camera {
                        Some(camera) => camera.generate_ray(sample),
                        None => default_camera.generate_ray(sample),
                    };

                    pixel_color += tracer.trace_ray(self, ray);
                }

                // average here so output brightness does not depend on the
                // sample count
                pixel_color /= samples as f64;

                self.display_pixel(row, column, pixel_color);
            }

            STATS.write().unwrap().rays_done += width as u64 * samples as u64;
            bar.inc(1);
        }

        bar.finish_and_clear();
        info!("render finished");
    }

    /// Maps a raw linear color to a displayable pixel and writes it to the
    /// sink, flipping from bottom-up rows to top-down screen coordinates.
    pub fn display_pixel(&mut self, row: u32, column: u32, raw_color: Vector3<f64>) {
        let mapped_color = if self.view_plane.show_out_of_gamut {
            max_to_one(raw_color)
        } else {
            clamp_to_color(raw_color)
        };

        let mapped_color = if self.view_plane.gamma() != 1.0 {
            powc(mapped_color, self.view_plane.inv_gamma())
        } else {
            mapped_color
        };

        let x = column;
        let y = self.view_plane.height - row - 1;

        if let Some(output) = self.output.as_mut() {
            // truncation, not rounding
            output.set_pixel(
                x,
                y,
                (mapped_color.x * 255.0) as u8,
                (mapped_color.y * 255.0) as u8,
                (mapped_color.z * 255.0) as u8,
            );
        }
    }
}
