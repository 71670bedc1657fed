// src/wave/sink.rs
use bevy::prelude::*;
use std::collections::HashMap;

use super::params::{
    WaveParams, WAVE_AMP, WAVE_DIR_X, WAVE_DIR_Z, WAVE_FREQUENCY, WAVE_SPEED,
};

/// Key-value float sink for shader parameters. Single-writer by
/// convention: only the wave animator pushes wave keys; enforcing that
/// with a lock is unnecessary in the single-threaded frame model.
pub trait ShaderParamSink {
    fn set_float(&mut self, key: &str, value: f32);
}

/// In-memory sink the render layer reads when filling material uniforms.
#[derive(Resource, Default, Debug)]
pub struct WaveParamTable {
    values: HashMap<String, f32>,
}

impl WaveParamTable {
    pub fn get(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ShaderParamSink for WaveParamTable {
    fn set_float(&mut self, key: &str, value: f32) {
        // Overwrites reuse the existing key, keeping the per-frame
        // `_WaveTime` push allocation-free.
        if let Some(slot) = self.values.get_mut(key) {
            *slot = value;
        } else {
            self.values.insert(key.to_owned(), value);
        }
    }
}

/// Push the static wave parameters. Called once at init; only `_WaveTime`
/// changes after that.
pub fn push_params(params: &WaveParams, sink: &mut dyn ShaderParamSink) {
    sink.set_float(WAVE_AMP, params.amplitude);
    sink.set_float(WAVE_SPEED, params.speed);
    sink.set_float(WAVE_DIR_X, params.direction.x);
    sink.set_float(WAVE_DIR_Z, params.direction.y);
    sink.set_float(WAVE_FREQUENCY, params.frequency);
}
