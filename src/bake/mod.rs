mod error;
mod material;
mod mesh;
mod plugin;

pub use error::BakeError;
pub use material::{bind_layers, MaterialSlots, ProxySlots, TerrainLayer, MAX_CONTROL, MAX_LAYERS};
pub use mesh::{generate_grid_mesh, GridMesh, MAX_RESOLUTION, MIN_RESOLUTION};
pub use plugin::{bake_proxy, load_bake_inputs, BakePlugin, ProxyMesh, ProxyStartupSet};
