// src/wave/animator.rs
use bevy::prelude::*;

use super::params::{wave_height, WaveParams};

/// Tilt (degrees of Euler rotation) per unit of vertical displacement.
pub const SWAY_TILT_DEG: f32 = 5.0;

/// Marker for spawned vegetation instances.
#[derive(Component)]
pub struct WaveInstance;

/// Marks the entity whose position drives distance culling (normally the
/// camera). Falls back to the world origin when absent.
#[derive(Component)]
pub struct WaveViewer;

/// One animated instance: the spawned entity plus its immutable anchor.
pub struct VegInstance {
    pub entity: Entity,
    pub base_position: Vec3,
}

/// Owns the vegetation instance list and the wave clock. Inserted once at
/// init (that insertion is the UNINITIALIZED -> RUNNING transition) and
/// never rebuilt; recreating the vegetation means recreating this
/// resource.
#[derive(Resource)]
pub struct WaveAnimator {
    pub params: WaveParams,
    pub cull_distance: f32,
    time: f32,
    instances: Vec<VegInstance>,
}

impl WaveAnimator {
    pub fn new(params: WaveParams, cull_distance: f32, instances: Vec<VegInstance>) -> Self {
        Self { params, cull_distance, time: 0.0, instances }
    }

    /// Monotonic wave clock; never reset.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn instances(&self) -> &[VegInstance] {
        &self.instances
    }

    /// Advance the clock by one frame and return the new time.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.time += delta;
        self.time
    }

    /// Displaced transform for an instance anchored at `base`, or `None`
    /// when the instance is beyond the cull distance from `viewer` on the
    /// ground plane (culled instances stay exactly where they were).
    pub fn displace(&self, base: Vec3, viewer: Vec3) -> Option<(Vec3, Quat)> {
        let dx = base.x - viewer.x;
        let dz = base.z - viewer.z;
        if dx * dx + dz * dz > self.cull_distance * self.cull_distance {
            return None;
        }

        let h = wave_height(base, &self.params, self.time);
        // Coupled tilt; overwrites the spawn yaw on purpose (the shader
        // contract was authored against this, see DESIGN.md).
        let sway = (h * SWAY_TILT_DEG).to_radians();
        let rotation = Quat::from_euler(EulerRot::XYZ, sway, 0.0, sway);
        Some((Vec3::new(base.x, base.y + h, base.z), rotation))
    }
}
