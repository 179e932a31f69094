use std::sync::RwLock;

use lazy_static::lazy_static;
use nalgebra::{Point3, Vector3};

/// A ray used to query scene geometry: an origin position plus a direction.
#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

#[derive(Debug, Default)]
pub struct Stats {
    pub rays_done: u64,
}

lazy_static! {
    pub static ref STATS: RwLock<Stats> = RwLock::new(Stats::default());
}
