//! System-level tests for steering, movement, bounds and animation.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use bulldogwalk::components::animation::{Animation, IdleColumn, WalkCycle};
use bulldogwalk::components::boxcollider::BoxCollider;
use bulldogwalk::components::facing::Facing;
use bulldogwalk::components::mapposition::MapPosition;
use bulldogwalk::components::rigidbody::RigidBody;
use bulldogwalk::components::sprite::Sprite;
use bulldogwalk::components::steering::Steering;
use bulldogwalk::resources::animationstore::{AnimationResource, AnimationStore};
use bulldogwalk::resources::input::InputState;
use bulldogwalk::resources::screensize::ScreenSize;
use bulldogwalk::resources::spritesheet::{FrameRounding, SpriteSheet, SpriteSheetStore};
use bulldogwalk::resources::worldtime::WorldTime;
use bulldogwalk::systems::animation::{animation, facing_animation_selector};
use bulldogwalk::systems::bounds::world_bounds_system;
use bulldogwalk::systems::movement::movement;
use bulldogwalk::systems::steering::steering_controller;

const EPSILON: f32 = 1e-3;
const SHEET_KEY: &str = "sheet";

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(InputState::default());

    let sheet = SpriteSheet::from_image_size(96, 128, 3, 4, FrameRounding::Floor);
    let mut sheets = SpriteSheetStore::new();
    sheets.insert(SHEET_KEY, sheet);
    world.insert_resource(sheets);

    let mut store = AnimationStore::new();
    for facing in Facing::ALL {
        store.insert(
            format!("walk-{}", facing),
            AnimationResource {
                tex_key: Arc::from(SHEET_KEY),
                frames: sheet.row_frames(facing.row() as u32),
                fps: 10.0,
                looped: true,
            },
        );
    }
    store.insert(
        "once",
        AnimationResource {
            tex_key: Arc::from(SHEET_KEY),
            frames: vec![0, 1],
            fps: 10.0,
            looped: false,
        },
    );
    world.insert_resource(store);
    world
}

fn tick(world: &mut World, dt: f32, schedule: &mut Schedule) {
    world.resource_mut::<WorldTime>().advance(dt);
    schedule.run(world);
}

fn steering_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(steering_controller);
    schedule
}

fn walk_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((steering_controller, movement).chain());
    schedule
}

fn selector_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(facing_animation_selector);
    schedule
}

fn animation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule
}

fn bounds_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(world_bounds_system);
    schedule
}

fn spawn_walker(world: &mut World, x: f32, y: f32, idle_column: IdleColumn) -> Entity {
    world
        .spawn((
            MapPosition::new(x, y),
            RigidBody::new(),
            Steering::default(),
            Facing::Down,
            Animation::new("walk-down"),
            WalkCycle::new("walk", 3, idle_column),
            Sprite::centered(SHEET_KEY, 32.0, 32.0),
        ))
        .id()
}

fn set_target(world: &mut World, entity: Entity, x: f32, y: f32) {
    world
        .get_mut::<Steering>(entity)
        .unwrap()
        .set_target(Vector2 { x, y });
}

#[test]
fn held_key_overrides_and_clears_target() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    set_target(&mut world, e, 400.0, 400.0);
    world
        .resource_mut::<InputState>()
        .set_direction(Facing::Right, true);

    tick(&mut world, 1.0 / 60.0, &mut steering_schedule());

    assert!(world.get::<Steering>(e).unwrap().target.is_none());
    let vel = world.get::<RigidBody>(e).unwrap().velocity;
    assert_eq!(vel, Vector2 { x: 200.0, y: 0.0 });
}

#[test]
fn every_held_key_clears_target() {
    for facing in Facing::ALL {
        let mut world = make_world();
        let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
        set_target(&mut world, e, 10.0, 10.0);
        world.resource_mut::<InputState>().set_direction(facing, true);

        tick(&mut world, 1.0 / 60.0, &mut steering_schedule());

        assert!(world.get::<Steering>(e).unwrap().target.is_none());
        let vel = world.get::<RigidBody>(e).unwrap().velocity;
        assert_eq!(vel, facing.unit_vector().scale_by(200.0));
    }
}

#[test]
fn no_input_and_no_target_means_zero_velocity() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    world
        .get_mut::<RigidBody>(e)
        .unwrap()
        .set_velocity(Vector2 { x: 50.0, y: 50.0 });

    tick(&mut world, 1.0 / 60.0, &mut steering_schedule());

    assert!(!world.get::<RigidBody>(e).unwrap().is_moving());
}

#[test]
fn steering_without_rigidbody_is_noop() {
    let mut world = make_world();
    let e = world
        .spawn((MapPosition::new(0.0, 0.0), Steering::default()))
        .id();
    set_target(&mut world, e, 1.0, 1.0);
    world
        .resource_mut::<InputState>()
        .set_direction(Facing::Up, true);

    tick(&mut world, 1.0 / 60.0, &mut steering_schedule());

    assert!(world.get::<Steering>(e).unwrap().target.is_some());
}

#[test]
fn distance_to_target_strictly_decreases_until_arrival() {
    for (tx, ty) in [(350.0, 100.0), (20.0, 420.0), (101.0, 115.0), (-40.0, -60.0)] {
        let mut world = make_world();
        let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
        set_target(&mut world, e, tx, ty);
        let target = Vector2 { x: tx, y: ty };

        let mut schedule = walk_schedule();
        let mut last = world.get::<MapPosition>(e).unwrap().distance_to(target);
        let mut frames = 0;
        while world.get::<Steering>(e).unwrap().has_target() {
            tick(&mut world, 1.0 / 60.0, &mut schedule);
            frames += 1;
            assert!(frames < 1000, "never arrived at ({}, {})", tx, ty);
            if world.get::<Steering>(e).unwrap().has_target() {
                let d = world.get::<MapPosition>(e).unwrap().distance_to(target);
                assert!(d < last, "distance went from {} to {}", last, d);
                last = d;
            }
        }
        let final_distance = world.get::<MapPosition>(e).unwrap().distance_to(target);
        assert!(final_distance < 8.0);
        assert!(!world.get::<RigidBody>(e).unwrap().is_moving());
    }
}

#[test]
fn large_frame_time_does_not_overshoot() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    set_target(&mut world, e, 130.0, 100.0);

    // 0.5s at 200 u/s would cover 100 units; only 30 remain
    tick(&mut world, 0.5, &mut walk_schedule());
    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(pos.x, 130.0));

    tick(&mut world, 0.5, &mut walk_schedule());
    assert!(world.get::<Steering>(e).unwrap().target.is_none());
    assert!(!world.get::<RigidBody>(e).unwrap().is_moving());
}

#[test]
fn selector_picks_facing_and_plays_walk_track() {
    let cases = [
        (Vector2 { x: 200.0, y: 10.0 }, Facing::Right, "walk-right"),
        (Vector2 { x: -200.0, y: 10.0 }, Facing::Left, "walk-left"),
        (Vector2 { x: 50.0, y: 50.0 }, Facing::Down, "walk-down"),
        (Vector2 { x: 10.0, y: -200.0 }, Facing::Up, "walk-up"),
    ];
    for (velocity, facing, key) in cases {
        let mut world = make_world();
        let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
        world.get_mut::<RigidBody>(e).unwrap().set_velocity(velocity);

        tick(&mut world, 1.0 / 60.0, &mut selector_schedule());

        assert_eq!(*world.get::<Facing>(e).unwrap(), facing);
        assert!(world.get::<Animation>(e).unwrap().is_playing(key));
    }
}

#[test]
fn selector_keeps_running_track_frame() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    world
        .get_mut::<RigidBody>(e)
        .unwrap()
        .set_velocity(Vector2 { x: 0.0, y: 200.0 });
    tick(&mut world, 1.0 / 60.0, &mut selector_schedule());
    world.get_mut::<Animation>(e).unwrap().frame_index = 2;

    tick(&mut world, 1.0 / 60.0, &mut selector_schedule());

    assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 2);
}

#[test]
fn halting_stops_animation_and_shows_idle_frame() {
    for (idle_column, expected_x) in [(IdleColumn::First, 0.0), (IdleColumn::Second, 32.0)] {
        let mut world = make_world();
        let e = spawn_walker(&mut world, 100.0, 100.0, idle_column);
        world
            .get_mut::<RigidBody>(e)
            .unwrap()
            .set_velocity(Vector2 { x: -200.0, y: 0.0 });
        tick(&mut world, 1.0 / 60.0, &mut selector_schedule());

        world.get_mut::<RigidBody>(e).unwrap().stop();
        tick(&mut world, 1.0 / 60.0, &mut selector_schedule());

        assert_eq!(*world.get::<Facing>(e).unwrap(), Facing::Left);
        let anim = world.get::<Animation>(e).unwrap();
        assert!(!anim.playing);
        // left is row 1: idle frame = 1 * 3 + idle column
        let sprite = world.get::<Sprite>(e).unwrap();
        assert_eq!(sprite.offset, Vector2 { x: expected_x, y: 32.0 });
    }
}

#[test]
fn animation_cycles_through_row_frames() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    world
        .get_mut::<Animation>(e)
        .unwrap()
        .play("walk-right", true);

    let mut schedule = animation_schedule();
    let mut xs = Vec::new();
    for _ in 0..4 {
        tick(&mut world, 0.1, &mut schedule);
        xs.push(world.get::<Sprite>(e).unwrap().offset);
    }
    // right is row 2 (y = 64); frames loop 1, 2, 0, 1
    let expected: Vec<Vector2> = [32.0, 64.0, 0.0, 32.0]
        .iter()
        .map(|&x| Vector2 { x, y: 64.0 })
        .collect();
    assert_eq!(xs, expected);
}

#[test]
fn stopped_animation_does_not_advance() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    world
        .get_mut::<Sprite>(e)
        .unwrap()
        .offset = Vector2 { x: 64.0, y: 96.0 };

    tick(&mut world, 1.0, &mut animation_schedule());

    assert_eq!(
        world.get::<Sprite>(e).unwrap().offset,
        Vector2 { x: 64.0, y: 96.0 }
    );
}

#[test]
fn non_looping_animation_stops_on_last_frame() {
    let mut world = make_world();
    let e = spawn_walker(&mut world, 100.0, 100.0, IdleColumn::First);
    world.get_mut::<Animation>(e).unwrap().play("once", false);

    let mut schedule = animation_schedule();
    for _ in 0..3 {
        tick(&mut world, 0.1, &mut schedule);
    }

    let anim = world.get::<Animation>(e).unwrap();
    assert!(!anim.playing);
    assert_eq!(anim.frame_index, 1);
    assert_eq!(
        world.get::<Sprite>(e).unwrap().offset,
        Vector2 { x: 32.0, y: 0.0 }
    );
}

#[test]
fn bounds_keep_collider_inside_screen_and_zero_outward_velocity() {
    let mut world = make_world();
    let mut rb = RigidBody::new();
    rb.set_velocity(Vector2 { x: -200.0, y: 50.0 });
    let e = world
        .spawn((
            MapPosition::new(10.0, 300.0),
            rb,
            BoxCollider::centered(64.0, 64.0),
        ))
        .id();

    tick(&mut world, 1.0 / 60.0, &mut bounds_schedule());

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(pos.x, 32.0));
    assert!(approx_eq(pos.y, 300.0));
    let vel = world.get::<RigidBody>(e).unwrap().velocity;
    assert_eq!(vel, Vector2 { x: 0.0, y: 50.0 });
}

#[test]
fn bounds_follow_resized_screen() {
    let mut world = make_world();
    let e = world
        .spawn((
            MapPosition::new(700.0, 500.0),
            BoxCollider::centered(64.0, 64.0),
        ))
        .id();

    *world.resource_mut::<ScreenSize>() = ScreenSize { w: 400, h: 300 };
    tick(&mut world, 1.0 / 60.0, &mut bounds_schedule());

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert_eq!(pos, Vector2 { x: 368.0, y: 268.0 });
}
