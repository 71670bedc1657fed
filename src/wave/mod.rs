mod animator;
pub mod params;
mod placement;
mod plugin;
mod sink;
mod systems;

pub use animator::{VegInstance, WaveAnimator, WaveInstance, WaveViewer, SWAY_TILT_DEG};
pub use placement::{
    scatter_placements, select_in_range, Placements, PrototypeTable, TreePlacement,
};
pub use plugin::WavePlugin;
pub use sink::{push_params, ShaderParamSink, WaveParamTable};
pub use systems::{animate_vegetation, init_wave_system, load_prototypes, scatter_demo_placements};
