// src/wave/plugin.rs
use bevy::prelude::*;

use super::animator::WaveAnimator;
use super::placement::Placements;
use super::sink::WaveParamTable;
use super::systems::{animate_vegetation, init_wave_system, load_prototypes, scatter_demo_placements};
use crate::bake::ProxyStartupSet;

pub struct WavePlugin;

impl Plugin for WavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaveParamTable>()
            .add_systems(
                Startup,
                (load_prototypes, scatter_demo_placements).in_set(ProxyStartupSet::Bake),
            )
            .add_systems(
                Startup,
                init_wave_system
                    .in_set(ProxyStartupSet::Vegetation)
                    .run_if(resource_exists::<Placements>),
            )
            .add_systems(
                Update,
                animate_vegetation.run_if(resource_exists::<WaveAnimator>),
            );
    }
}
