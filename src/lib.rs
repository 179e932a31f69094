//! Rendering core of an offline ray tracer.
//!
//! A scene [`World`] owns the geometric objects, the lights, a tracer and an
//! output sink. The render loop samples every pixel, finds the nearest hit
//! along each primary ray with a deterministic scan-order tie-break, and maps
//! the averaged radiance to displayable 8-bit color.

#![warn(clippy::all)]

pub mod camera;
pub mod film;
pub mod helpers;
pub mod lights;
pub mod logger;
pub mod materials;
pub mod maths;
pub mod objects;
pub mod renderer;
pub mod sampler;
pub mod scene;
pub mod shade_record;
pub mod tracer;
pub mod view_plane;

pub use camera::{Camera, OrthographicCamera};
pub use film::{Film, RenderOutput};
pub use renderer::Ray;
pub use sampler::{Sampler, SamplerMethod};
pub use scene::World;
pub use shade_record::ShadeRec;
pub use tracer::Tracer;
pub use view_plane::ViewPlane;
