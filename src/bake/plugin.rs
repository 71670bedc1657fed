// src/bake/plugin.rs
use bevy::prelude::*;
use std::sync::Arc;

use super::material::{bind_layers, ProxySlots, TerrainLayer};
use super::mesh::generate_grid_mesh;
use crate::config::ProxyConfig;
use crate::heightfield::{FlatField, HeightField, ImageHeightField, ProxyField};

/// Startup ordering: inputs first, then the bake, then vegetation setup
/// (the wave plugin hangs its init off `Vegetation`).
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ProxyStartupSet {
    Load,
    Bake,
    Vegetation,
}

/// Marker for the spawned proxy mesh entity.
#[derive(Component)]
pub struct ProxyMesh;

pub struct BakePlugin;

impl Plugin for BakePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                ProxyStartupSet::Load,
                ProxyStartupSet::Bake.after(ProxyStartupSet::Load),
                ProxyStartupSet::Vegetation.after(ProxyStartupSet::Bake),
            ),
        )
        .add_systems(Startup, load_bake_inputs.in_set(ProxyStartupSet::Load))
        .add_systems(Startup, bake_proxy.in_set(ProxyStartupSet::Bake));
    }
}

/// Read `assets/proxy.ron` and the heightmap it points at. Either may be
/// absent: the config falls back to defaults, the field to flat ground.
pub fn load_bake_inputs(mut commands: Commands) {
    let config = match ProxyConfig::load("assets/proxy.ron") {
        Ok(c) => c,
        Err(e) => {
            warn!("bake: proxy.ron unavailable ({e}); using defaults");
            ProxyConfig::default()
        }
    };

    let field: Arc<dyn HeightField> = match ImageHeightField::from_png(
        &config.field.image,
        config.field.origin,
        config.field.size,
        config.field.height_scale,
    ) {
        Ok(f) => Arc::new(f),
        Err(e) => {
            warn!("bake: height field unavailable ({e}); falling back to flat ground");
            Arc::new(FlatField {
                y: 0.0,
                origin: config.field.origin,
                extent: config.field.size,
            })
        }
    };

    commands.insert_resource(ProxyField(field));
    commands.insert_resource(config);
}

/// One-shot bake: grid mesh over the configured area plus the material
/// slot table. Fails fast on bad parameters; nothing is spawned on error.
pub fn bake_proxy(
    mut commands: Commands,
    config: Res<ProxyConfig>,
    field: Res<ProxyField>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let grid = match generate_grid_mesh(
        field.0.as_ref(),
        config.bake.center,
        config.bake.size,
        config.bake.resolution,
    ) {
        Ok(grid) => grid,
        Err(e) => {
            error!("bake: aborted, {e}");
            return;
        }
    };
    info!(
        "bake: proxy mesh {} verts / {} tris over {}m at {}",
        grid.vertex_count(),
        grid.triangle_count(),
        config.bake.size,
        config.bake.center,
    );

    let control: Vec<Handle<Image>> = config
        .control_maps
        .iter()
        .map(|path| asset_server.load(path.clone()))
        .collect();
    let layers: Vec<TerrainLayer> = config
        .layers
        .iter()
        .map(|l| TerrainLayer {
            diffuse: asset_server.load(l.diffuse.clone()),
            normal: l.normal.as_ref().map(|n| asset_server.load(n.clone())),
            tile: l.tile,
        })
        .collect();
    let slots = bind_layers(&control, &layers);
    info!("bake: bound {} of {} terrain layers", slots.bound_layers(), config.layers.len());

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.55, 0.35),
        perceptual_roughness: 1.0,
        ..default()
    });
    let mesh_handle = meshes.add(grid.into_mesh());

    // Proxy frame: bake center projected to the ground plane, heights in
    // world units inside the mesh.
    commands.spawn((
        Mesh3d(mesh_handle),
        MeshMaterial3d(material),
        Transform::from_xyz(config.bake.center.x, 0.0, config.bake.center.z),
        ProxyMesh,
    ));
    commands.insert_resource(ProxySlots(slots));
}
