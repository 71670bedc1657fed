// src/wave/placement.rs
//! Static vegetation placements and the demo scatter that produces them.
//! The animator consumes any `TreePlacement` slice; where they come from
//! (a source terrain's instance list, a baked file, the scatter below) is
//! the host's business.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ScatterSettings;
use crate::heightfield::HeightField;

/// One static placement as the placement source yields it.
#[derive(Clone, Copy, Debug)]
pub struct TreePlacement {
    pub position: Vec3,
    /// Yaw (radians) around +Y.
    pub yaw: f32,
    pub width_scale: f32,
    pub height_scale: f32,
    /// Index into the prototype table.
    pub prototype: usize,
}

/// All static placements handed to the animator at init.
#[derive(Resource, Default)]
pub struct Placements(pub Vec<TreePlacement>);

/// Prototype index -> renderable scene. Unset slots make the placements
/// that reference them unspawnable (they are dropped at init, not errors).
#[derive(Resource, Default)]
pub struct PrototypeTable(pub Vec<Option<Handle<Scene>>>);

impl PrototypeTable {
    pub fn resolve(&self, index: usize) -> Option<&Handle<Scene>> {
        self.0.get(index).and_then(|slot| slot.as_ref())
    }
}

/// Indices of placements whose ground-plane distance to `center` is
/// strictly less than `range` (squared-distance compare, no sqrt).
pub fn select_in_range(placements: &[TreePlacement], center: Vec3, range: f32) -> Vec<usize> {
    let range_sq = range * range;
    placements
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            let dx = p.position.x - center.x;
            let dz = p.position.z - center.z;
            dx * dx + dz * dz < range_sq
        })
        .map(|(i, _)| i)
        .collect()
}

/// Deterministic jittered-grid scatter over the square of side `size`
/// around `center`, heights snapped to the field. Demo-only: a real host
/// supplies its own placements.
pub fn scatter_placements(
    settings: &ScatterSettings,
    center: Vec3,
    size: f32,
    prototype_count: usize,
    field: &dyn HeightField,
) -> Vec<TreePlacement> {
    let cell = settings.cell.max(0.0001);
    let jitter = settings.jitter.clamp(0.0, 0.5);
    let n = (size / cell).floor().max(1.0) as i32;
    let min_x = center.x - size * 0.5;
    let min_z = center.z - size * 0.5;

    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    let mut out = Vec::with_capacity((n * n) as usize);

    for j in 0..n {
        for i in 0..n {
            let cx = min_x + (i as f32 + 0.5) * cell;
            let cz = min_z + (j as f32 + 0.5) * cell;
            let jx = (rng.random::<f32>() - 0.5) * 2.0 * (jitter * cell);
            let jz = (rng.random::<f32>() - 0.5) * 2.0 * (jitter * cell);
            let x = cx + jx;
            let z = cz + jz;

            let y = field.sample_height(Vec3::new(x, 0.0, z));
            let yaw = rng.random_range(0.0..std::f32::consts::TAU);
            let scale = rng.random_range(0.8..1.2);

            out.push(TreePlacement {
                position: Vec3::new(x, y, z),
                yaw,
                width_scale: scale,
                height_scale: rng.random_range(0.8..1.2),
                prototype: if prototype_count > 0 {
                    rng.random_range(0..prototype_count)
                } else {
                    0
                },
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightfield::FlatField;

    fn at(x: f32, z: f32) -> TreePlacement {
        TreePlacement {
            position: Vec3::new(x, 0.0, z),
            yaw: 0.0,
            width_scale: 1.0,
            height_scale: 1.0,
            prototype: 0,
        }
    }

    #[test]
    fn range_boundary_is_strictly_exclusive() {
        let range = 10.0;
        let placements = vec![at(10.0, 0.0), at(9.9995, 0.0)];
        let picked = select_in_range(&placements, Vec3::ZERO, range);
        assert_eq!(picked, vec![1]);
    }

    #[test]
    fn two_of_three_placements_fall_in_range() {
        let placements = vec![at(1.0, 2.0), at(-3.0, 4.0), at(200.0, 0.0)];
        let picked = select_in_range(&placements, Vec3::ZERO, 100.0);
        assert_eq!(picked, vec![0, 1]);
    }

    #[test]
    fn height_does_not_affect_selection() {
        let mut p = at(3.0, 0.0);
        p.position.y = 5_000.0;
        assert_eq!(select_in_range(&[p], Vec3::ZERO, 10.0), vec![0]);
    }

    #[test]
    fn scatter_is_deterministic_per_seed() {
        let field = FlatField { y: 2.0, origin: Vec2::splat(-100.0), extent: Vec2::splat(200.0) };
        let settings = ScatterSettings { seed: 99, cell: 10.0, jitter: 0.3 };
        let a = scatter_placements(&settings, Vec3::ZERO, 80.0, 2, &field);
        let b = scatter_placements(&settings, Vec3::ZERO, 80.0, 2, &field);
        assert_eq!(a.len(), b.len());
        assert!(!a.is_empty());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.yaw, pb.yaw);
            assert_eq!(pa.prototype, pb.prototype);
        }
    }

    #[test]
    fn scatter_stays_inside_the_area_and_on_the_ground() {
        let field = FlatField { y: 2.0, origin: Vec2::splat(-100.0), extent: Vec2::splat(200.0) };
        let settings = ScatterSettings { seed: 7, cell: 10.0, jitter: 0.5 };
        let placements = scatter_placements(&settings, Vec3::new(50.0, 0.0, -50.0), 60.0, 1, &field);
        for p in &placements {
            assert!(p.position.x >= 20.0 - 1e-3 && p.position.x <= 80.0 + 1e-3);
            assert!(p.position.z >= -80.0 - 1e-3 && p.position.z <= -20.0 + 1e-3);
            assert_eq!(p.position.y, 2.0);
            assert_eq!(p.prototype, 0);
        }
    }
}
