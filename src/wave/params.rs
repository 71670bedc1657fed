// src/wave/params.rs
use bevy::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

// Shader property names. Pushed once at init (except time, pushed per frame).
pub const WAVE_AMP: &str = "_WaveAmp";
pub const WAVE_SPEED: &str = "_WaveSpeed";
pub const WAVE_DIR_X: &str = "_WaveDirX";
pub const WAVE_DIR_Z: &str = "_WaveDirZ";
pub const WAVE_FREQUENCY: &str = "_WaveFrequency";
pub const WAVE_TIME: &str = "_WaveTime";

/// Wave configuration shared verbatim between the proxy shader and the CPU
/// animator. Any numeric drift between the two desyncs the ground and the
/// vegetation, so this struct is pushed to the shader sink as-is.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WaveParams {
    pub amplitude: f32,
    pub speed: f32,
    /// Ground-plane travel direction; not required to be unit length.
    pub direction: Vec2,
    pub frequency: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            speed: 1.0,
            direction: Vec2::new(1.0, 0.6),
            frequency: 0.1,
        }
    }
}

/// Vertical wave displacement for an instance anchored at `base`.
///
/// The secondary sine decorrelates neighbouring instances so the field
/// doesn't bob in unison. Its constants (0.3, 1.3, 0.5) are mirrored in
/// the shader's displacement function and must not be changed on one side
/// only.
#[inline]
pub fn wave_height(base: Vec3, params: &WaveParams, time: f32) -> f32 {
    let t = time * params.speed;
    let dot = base.x * params.direction.x + base.z * params.direction.y;
    let mut h = (dot * params.frequency + t).sin();
    h += (base.x * 0.3 + t * 1.3).sin() * 0.5;
    h * params.amplitude
}
