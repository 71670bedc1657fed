// src/bake/mesh.rs
use bevy::math::Vec3;
use bevy::render::mesh::{Indices, Mesh};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use super::error::BakeError;
use crate::heightfield::HeightField;

/// Practical editing range for the grid resolution. Values outside this
/// band are legal (only 0 is rejected) but produce very coarse or very
/// heavy proxies.
pub const MIN_RESOLUTION: u32 = 32;
pub const MAX_RESOLUTION: u32 = 250;

/// A baked proxy mesh: `(res+1)^2` vertices, `2*res^2` triangles, with
/// UVs in the height field's control-map space (unclamped).
#[derive(Clone, Debug, PartialEq)]
pub struct GridMesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub min: Vec3,
    pub max: Vec3,
}

impl GridMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Assemble a renderable mesh from the baked data.
    pub fn into_mesh(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs);
        mesh.insert_indices(Indices::U32(self.indices));
        mesh
    }
}

/// Sample `field` over a `(resolution+1) x (resolution+1)` grid spanning
/// `[-size/2, +size/2]` on X and Z around `center`, and build the proxy
/// mesh in a local frame whose origin is `center` projected to the ground
/// plane (heights stay in world units).
///
/// UVs normalize each sample's world XZ by the field's own origin/extent,
/// so the proxy lines up with the source control maps even when it extends
/// past the field (UVs then leave [0,1]; they are intentionally not
/// clamped).
///
/// Pure and deterministic for a deterministic field; identical inputs
/// produce identical meshes.
pub fn generate_grid_mesh(
    field: &dyn HeightField,
    center: Vec3,
    size: f32,
    resolution: u32,
) -> Result<GridMesh, BakeError> {
    if resolution == 0 {
        return Err(BakeError::InvalidParameter(
            "mesh resolution must be at least 1 (got 0)".into(),
        ));
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(BakeError::InvalidParameter(format!(
            "mesh size must be positive and finite (got {size})"
        )));
    }
    let field_origin = field.origin();
    let field_extent = field.extent();
    if !(field_extent.x > 0.0) || !(field_extent.y > 0.0) {
        return Err(BakeError::InvalidParameter(format!(
            "height field extent must be positive (got {field_extent})"
        )));
    }

    let res = resolution as usize;
    let row = res + 1;
    let step = size / resolution as f32;
    let offset = size * -0.5;

    // 1) Positions & UVs
    let mut positions = Vec::with_capacity(row * row);
    let mut uvs = Vec::with_capacity(row * row);
    for j in 0..row {
        let pz = offset + j as f32 * step;
        for i in 0..row {
            let px = offset + i as f32 * step;
            let world = center + Vec3::new(px, 0.0, pz);
            let h = field.sample_height(world);
            positions.push([px, h, pz]);
            uvs.push([
                (world.x - field_origin.x) / field_extent.x,
                (world.z - field_origin.y) / field_extent.y,
            ]);
        }
    }

    // 2) Indices (two tris per quad, same diagonal throughout)
    let mut indices = Vec::with_capacity(res * res * 6);
    for j in 0..res {
        for i in 0..res {
            let a = (j * row + i) as u32;
            let c = a + row as u32;
            indices.extend_from_slice(&[a, c, a + 1, a + 1, c, c + 1]);
        }
    }

    let normals = averaged_normals(&positions, &indices);
    let (min, max) = bounds(&positions);

    Ok(GridMesh { positions, uvs, normals, indices, min, max })
}

/// Per-vertex normals from summed face normals.
fn averaged_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from_array(positions[a]);
        let pb = Vec3::from_array(positions[b]);
        let pc = Vec3::from_array(positions[c]);
        let face = (pb - pa).cross(pc - pa);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                [0.0, 1.0, 0.0]
            } else {
                n.to_array()
            }
        })
        .collect()
}

fn bounds(positions: &[[f32; 3]]) -> (Vec3, Vec3) {
    let mut min = Vec3::INFINITY;
    let mut max = Vec3::NEG_INFINITY;
    for p in positions {
        min = min.min(Vec3::from_array(*p));
        max = max.max(Vec3::from_array(*p));
    }
    (min, max)
}
