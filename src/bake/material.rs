// src/bake/material.rs
//! Fixed-slot binding of terrain control maps and layers for the 8-layer
//! proxy shader. The shader indexes its samplers by position, so layers
//! past `MAX_LAYERS` are dropped rather than remapped.

use bevy::prelude::*;

pub const MAX_LAYERS: usize = 8;
pub const MAX_CONTROL: usize = 2;

/// One terrain paint layer as the source terrain defines it.
#[derive(Clone, Debug)]
pub struct TerrainLayer {
    pub diffuse: Handle<Image>,
    pub normal: Option<Handle<Image>>,
    /// World-space tile size; only X is forwarded to the shader.
    pub tile: Vec2,
}

/// Slot table the caller applies to its material
/// (`control[0..2]`, `splat[0..8]`, `normal[0..8]`, `scale[0..8]`).
#[derive(Clone, Debug, Default)]
pub struct MaterialSlots {
    pub control: [Option<Handle<Image>>; MAX_CONTROL],
    pub splat: [Option<Handle<Image>>; MAX_LAYERS],
    pub normal: [Option<Handle<Image>>; MAX_LAYERS],
    pub scale: [f32; MAX_LAYERS],
}

impl MaterialSlots {
    pub fn bound_layers(&self) -> usize {
        self.splat.iter().filter(|s| s.is_some()).count()
    }
}

/// Slot table for the baked proxy material, for the render layer to consume.
#[derive(Resource, Default)]
pub struct ProxySlots(pub MaterialSlots);

/// Assign control maps and layers to their fixed shader slots. Layers past
/// index 8 and control maps past index 2 are ignored; when a layer tiles
/// differently on X and Y, the X tile size stands in for both (accepted
/// approximation of the 8-layer shader model).
pub fn bind_layers(control: &[Handle<Image>], layers: &[TerrainLayer]) -> MaterialSlots {
    let mut slots = MaterialSlots::default();
    for (i, map) in control.iter().take(MAX_CONTROL).enumerate() {
        slots.control[i] = Some(map.clone());
    }
    for (i, layer) in layers.iter().take(MAX_LAYERS).enumerate() {
        slots.splat[i] = Some(layer.diffuse.clone());
        slots.normal[i] = layer.normal.clone();
        slots.scale[i] = layer.tile.x;
    }
    slots
}
