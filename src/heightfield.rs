// src/heightfield.rs
use bevy::math::{Vec2, Vec3};
use bevy::prelude::*;
use image::GrayImage;
use std::path::Path;
use std::sync::Arc;

use crate::bake::BakeError;

/// Read-only elevation surface. Implementations must be deterministic:
/// the same world position always yields the same height.
pub trait HeightField: Send + Sync + 'static {
    /// Ground height (world units) at a world-space position (Y ignored).
    fn sample_height(&self, world: Vec3) -> f32;
    /// World-space XZ of the field's corner, i.e. where UV (0,0) lands.
    fn origin(&self) -> Vec2;
    /// World-space XZ span of the field.
    fn extent(&self) -> Vec2;
}

/// Shared handle to the active height field, inserted at startup.
#[derive(Resource, Clone)]
pub struct ProxyField(pub Arc<dyn HeightField>);

/// Grayscale-image-backed height field with bilinear filtering.
/// Samples outside the field clamp to the edge texel.
pub struct ImageHeightField {
    image: GrayImage,
    origin: Vec2,
    size: Vec2,
    height_scale: f32,
}

impl ImageHeightField {
    pub fn new(
        image: GrayImage,
        origin: Vec2,
        size: Vec2,
        height_scale: f32,
    ) -> Result<Self, BakeError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(BakeError::InvalidParameter(
                "height field image has zero pixels".into(),
            ));
        }
        if !(size.x > 0.0) || !(size.y > 0.0) {
            return Err(BakeError::InvalidParameter(format!(
                "height field extent must be positive (got {size})"
            )));
        }
        Ok(Self { image, origin, size, height_scale })
    }

    pub fn from_png(
        path: impl AsRef<Path>,
        origin: Vec2,
        size: Vec2,
        height_scale: f32,
    ) -> Result<Self, BakeError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| {
                BakeError::MissingReference(format!("height field image {}: {e}", path.display()))
            })?
            .to_luma8();
        Self::new(image, origin, size, height_scale)
    }

    #[inline]
    fn get_clamped(&self, x: i32, y: i32) -> u8 {
        let xi = x.clamp(0, self.image.width() as i32 - 1) as u32;
        let yi = y.clamp(0, self.image.height() as i32 - 1) as u32;
        self.image.get_pixel(xi, yi)[0]
    }
}

impl HeightField for ImageHeightField {
    fn sample_height(&self, world: Vec3) -> f32 {
        // Normalized position inside the field, edge-clamped
        let u = ((world.x - self.origin.x) / self.size.x).clamp(0.0, 1.0);
        let v = ((world.z - self.origin.y) / self.size.y).clamp(0.0, 1.0);

        let max_x = (self.image.width().saturating_sub(1)) as i32;
        let max_y = (self.image.height().saturating_sub(1)) as i32;

        let px_f = u * max_x as f32;
        let py_f = v * max_y as f32;

        let x0 = px_f.floor() as i32;
        let y0 = py_f.floor() as i32;
        let x1 = (x0 + 1).min(max_x);
        let y1 = (y0 + 1).min(max_y);

        let dx = px_f - x0 as f32;
        let dy = py_f - y0 as f32;

        let s00 = self.get_clamped(x0, y0) as f32;
        let s10 = self.get_clamped(x1, y0) as f32;
        let s01 = self.get_clamped(x0, y1) as f32;
        let s11 = self.get_clamped(x1, y1) as f32;

        let a = s00 * (1.0 - dx) + s10 * dx;
        let b = s01 * (1.0 - dx) + s11 * dx;
        let raw = a * (1.0 - dy) + b * dy;

        raw / 255.0 * self.height_scale
    }

    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn extent(&self) -> Vec2 {
        self.size
    }
}

/// Constant-height fallback used when no heightmap is available.
pub struct FlatField {
    pub y: f32,
    pub origin: Vec2,
    pub extent: Vec2,
}

impl HeightField for FlatField {
    fn sample_height(&self, _world: Vec3) -> f32 {
        self.y
    }
    fn origin(&self) -> Vec2 {
        self.origin
    }
    fn extent(&self) -> Vec2 {
        self.extent
    }
}
