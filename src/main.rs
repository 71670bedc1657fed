use bevy::prelude::*;

use verdant::bake::BakePlugin;
use verdant::setup;
use verdant::wave::WavePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        // bake the terrain proxy at startup, then animate its vegetation
        .add_plugins(BakePlugin)
        .add_plugins(WavePlugin)
        .add_systems(Startup, setup::setup)
        .run();
}
