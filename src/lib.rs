//! Heightmap-to-proxy terrain baking plus a shader-synced vegetation wave
//! animator. The bake pass samples a height field into a grid mesh with
//! control-map UVs; the wave pass sways spawned vegetation with the exact
//! displacement function the proxy shader uses, culled by viewer distance.

pub mod bake;
pub mod config;
pub mod heightfield;
pub mod setup;
pub mod wave;

pub use bake::{BakeError, BakePlugin};
pub use config::ProxyConfig;
pub use heightfield::{HeightField, ProxyField};
pub use wave::WavePlugin;
