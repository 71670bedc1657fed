// src/wave/systems.rs
use bevy::prelude::*;

use super::animator::{VegInstance, WaveAnimator, WaveInstance, WaveViewer};
use super::params::WAVE_TIME;
use super::placement::{scatter_placements, select_in_range, Placements, PrototypeTable};
use super::sink::{push_params, ShaderParamSink, WaveParamTable};
use crate::config::ProxyConfig;
use crate::heightfield::ProxyField;

/// Resolve the configured prototype paths into scene handles.
pub fn load_prototypes(
    mut commands: Commands,
    config: Res<ProxyConfig>,
    asset_server: Res<AssetServer>,
) {
    let handles: Vec<Option<Handle<Scene>>> = config
        .prototypes
        .iter()
        .map(|path| Some(asset_server.load(path.clone())))
        .collect();
    commands.insert_resource(PrototypeTable(handles));
}

/// Demo placement source: deterministic scatter over the bake area.
pub fn scatter_demo_placements(
    mut commands: Commands,
    config: Res<ProxyConfig>,
    field: Res<ProxyField>,
) {
    let placements = scatter_placements(
        &config.scatter,
        config.bake.center,
        config.bake.size,
        config.prototypes.len(),
        field.0.as_ref(),
    );
    info!("wave: scattered {} placements (seed {})", placements.len(), config.scatter.seed);
    commands.insert_resource(Placements(placements));
}

/// Build the animator from the static placements: keep those strictly
/// inside half the bake size of the bake center (on the ground plane) with
/// a resolvable prototype, spawn each, cache its base position, and push
/// the wave parameters to the sink once. Inserting the `WaveAnimator`
/// resource is the transition to RUNNING; an empty selection still
/// transitions and just no-ops every frame.
pub fn init_wave_system(
    mut commands: Commands,
    config: Res<ProxyConfig>,
    placements: Res<Placements>,
    prototypes: Res<PrototypeTable>,
    mut sink: Option<ResMut<WaveParamTable>>,
) {
    let center = config.bake.center;
    let range = config.bake.size * 0.5;

    let mut instances = Vec::new();
    for index in select_in_range(&placements.0, center, range) {
        let p = &placements.0[index];
        let Some(scene) = prototypes.resolve(p.prototype) else {
            continue;
        };
        let entity = commands
            .spawn((
                SceneRoot(scene.clone()),
                Transform {
                    translation: p.position,
                    rotation: Quat::from_rotation_y(p.yaw),
                    scale: Vec3::new(p.width_scale, p.height_scale, p.width_scale),
                },
                WaveInstance,
            ))
            .id();
        instances.push(VegInstance { entity, base_position: p.position });
    }

    if let Some(sink) = sink.as_deref_mut() {
        push_params(&config.wave, sink);
    }

    info!(
        "wave: {} of {} placements in range, cull at {}m",
        instances.len(),
        placements.0.len(),
        config.cull_distance,
    );
    commands.insert_resource(WaveAnimator::new(config.wave, config.cull_distance, instances));
}

/// Per-frame tick. Accumulates the wave clock, pushes `_WaveTime` so the
/// mesh shader stays phase-locked, then displaces every in-range instance.
/// Reads cached base positions and writes transforms only; nothing here
/// allocates.
pub fn animate_vegetation(
    time: Res<Time>,
    mut animator: ResMut<WaveAnimator>,
    mut sink: Option<ResMut<WaveParamTable>>,
    viewer: Query<&Transform, (With<WaveViewer>, Without<WaveInstance>)>,
    mut transforms: Query<&mut Transform, With<WaveInstance>>,
) {
    let now = animator.advance(time.delta_secs());
    if let Some(sink) = sink.as_deref_mut() {
        sink.set_float(WAVE_TIME, now);
    }

    let viewer_pos = viewer.single().map(|t| t.translation).unwrap_or(Vec3::ZERO);

    let animator = &*animator;
    for instance in animator.instances() {
        let Some((translation, rotation)) = animator.displace(instance.base_position, viewer_pos)
        else {
            continue;
        };
        // A despawned instance is a stale handle: skip it, never an error.
        let Ok(mut transform) = transforms.get_mut(instance.entity) else {
            continue;
        };
        transform.translation = translation;
        transform.rotation = rotation;
    }
}
