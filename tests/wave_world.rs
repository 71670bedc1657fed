//! ECS-level tests for the wave init + tick systems on a bare `World`.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use verdant::config::ProxyConfig;
use verdant::wave::params::{wave_height, WAVE_AMP, WAVE_DIR_Z, WAVE_TIME};
use verdant::wave::{
    animate_vegetation, init_wave_system, Placements, PrototypeTable, TreePlacement,
    WaveAnimator, WaveParamTable, WaveViewer,
};

fn placement(x: f32, y: f32, z: f32) -> TreePlacement {
    TreePlacement {
        position: Vec3::new(x, y, z),
        yaw: 0.0,
        width_scale: 1.0,
        height_scale: 1.0,
        prototype: 0,
    }
}

/// World with config defaults (bake size 200 -> range 100, cull 50), one
/// valid prototype, a viewer at the origin, and the given placements run
/// through init.
fn init_world(placements: Vec<TreePlacement>) -> World {
    let mut world = World::new();
    world.insert_resource(ProxyConfig::default());
    world.insert_resource(Placements(placements));
    world.insert_resource(PrototypeTable(vec![Some(Handle::default())]));
    world.insert_resource(WaveParamTable::default());
    world.insert_resource(Time::<()>::default());
    world.spawn((Transform::from_xyz(0.0, 0.0, 0.0), WaveViewer));
    world.run_system_once(init_wave_system).unwrap();
    world
}

fn tick(world: &mut World, delta: f32) {
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(delta));
    world.run_system_once(animate_vegetation).unwrap();
}

#[test]
fn init_selects_in_range_placements_and_pushes_params() {
    let world = init_world(vec![
        placement(1.0, 0.0, 2.0),
        placement(-30.0, 5.0, 40.0),
        placement(300.0, 0.0, 0.0), // outside range 100
    ]);

    let animator = world.resource::<WaveAnimator>();
    assert_eq!(animator.instances().len(), 2);
    assert_eq!(animator.instances()[0].base_position, Vec3::new(1.0, 0.0, 2.0));
    assert_eq!(animator.instances()[1].base_position, Vec3::new(-30.0, 5.0, 40.0));
    assert_eq!(animator.time(), 0.0);

    let table = world.resource::<WaveParamTable>();
    assert_eq!(table.get(WAVE_AMP), Some(1.0));
    assert_eq!(table.get(WAVE_DIR_Z), Some(0.6));
    assert_eq!(table.get(WAVE_TIME), None, "time is only pushed per tick");
}

#[test]
fn init_with_no_placements_still_runs() {
    let mut world = init_world(Vec::new());
    assert!(world.resource::<WaveAnimator>().instances().is_empty());
    tick(&mut world, 0.1);
    assert_eq!(world.resource::<WaveParamTable>().get(WAVE_TIME), Some(0.1));
}

#[test]
fn unresolvable_prototype_drops_the_placement() {
    let mut world = World::new();
    world.insert_resource(ProxyConfig::default());
    let mut bad = placement(0.0, 0.0, 0.0);
    bad.prototype = 5;
    world.insert_resource(Placements(vec![bad, placement(1.0, 0.0, 1.0)]));
    world.insert_resource(PrototypeTable(vec![Some(Handle::default())]));
    world.run_system_once(init_wave_system).unwrap();
    assert_eq!(world.resource::<WaveAnimator>().instances().len(), 1);
}

#[test]
fn ticks_accumulate_time_and_push_wave_time() {
    let mut world = init_world(vec![placement(1.0, 0.0, 2.0)]);
    tick(&mut world, 0.1);
    tick(&mut world, 0.1);

    let pushed = world.resource::<WaveParamTable>().get(WAVE_TIME).unwrap();
    assert!((pushed - 0.2).abs() < 1e-6, "pushed = {pushed}");
    assert!((world.resource::<WaveAnimator>().time() - 0.2).abs() < 1e-6);
}

#[test]
fn instances_beyond_cull_distance_are_left_untouched() {
    // squared ground-plane distances 2499 and 2501 against cull 50
    let near_x = 2499.0_f32.sqrt();
    let far_x = 2501.0_f32.sqrt();
    let mut world = init_world(vec![placement(near_x, 3.0, 0.0), placement(far_x, 3.0, 0.0)]);

    let (near, far, params) = {
        let animator = world.resource::<WaveAnimator>();
        (
            animator.instances()[0].entity,
            animator.instances()[1].entity,
            animator.params,
        )
    };
    tick(&mut world, 0.1);

    let near_tf = world.get::<Transform>(near).unwrap();
    let h = wave_height(Vec3::new(near_x, 3.0, 0.0), &params, 0.1);
    assert!((near_tf.translation.y - (3.0 + h)).abs() < 1e-5);

    let far_tf = world.get::<Transform>(far).unwrap();
    assert_eq!(far_tf.translation, Vec3::new(far_x, 3.0, 0.0));
    assert_eq!(far_tf.rotation, Quat::IDENTITY);
}

#[test]
fn despawned_instances_are_skipped_silently() {
    let mut world = init_world(vec![placement(1.0, 0.0, 2.0), placement(3.0, 0.0, 4.0)]);

    let (gone, kept) = {
        let animator = world.resource::<WaveAnimator>();
        (animator.instances()[0].entity, animator.instances()[1].entity)
    };
    world.despawn(gone);

    tick(&mut world, 0.1);

    // the stale handle stays in the list but is skipped; the live one moves
    assert_eq!(world.resource::<WaveAnimator>().instances().len(), 2);
    let kept_tf = world.get::<Transform>(kept).unwrap();
    let params = world.resource::<WaveAnimator>().params;
    let h = wave_height(Vec3::new(3.0, 0.0, 4.0), &params, 0.1);
    assert!((kept_tf.translation.y - h).abs() < 1e-5);
}
