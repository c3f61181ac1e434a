// Demo scene: camera, ground, a wand controller and three menu orbs
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::constants::*;
use crate::radial::{RadialItem, WandController};

/// Demo-only aim state for the wand (yaw/pitch in radians)
#[derive(Component)]
pub struct WandAim {
    pub yaw: f32,
    pub pitch: f32,
}

/// Demo-only bobbing motion so the engine reads moving target positions
#[derive(Component)]
pub struct MenuOrb {
    pub base_position: Vec3,
    pub phase: f32,
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera behind the wand, looking down the menu arc
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.8, 3.0).looking_at(Vec3::new(0.0, 1.2, -MENU_RADIUS), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground disc for spatial reference
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(12.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.2, 0.22),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(-PI / 2.0)),
    ));

    // The wand: a thin rod whose -Z axis is the aim direction
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(0.04, 0.04, 0.5))),
        MeshMaterial3d(materials.add(Color::srgb(0.8, 0.75, 0.6))),
        Transform::from_xyz(0.0, 1.2, 0.0),
        WandController,
        WandAim { yaw: 0.0, pitch: 0.0 },
    ));

    // Three menu orbs spread across an arc in front of the wand
    let mut rng = rand::thread_rng();
    let entries = [
        ("Inventory", Color::srgb(0.9, 0.4, 0.3)),
        ("Map", Color::srgb(0.3, 0.7, 0.9)),
        ("Settings", Color::srgb(0.5, 0.9, 0.4)),
    ];
    for (i, (label, color)) in entries.iter().enumerate() {
        let t = i as f32 / (entries.len() - 1) as f32 - 0.5;
        let yaw = t * MENU_ARC_DEG.to_radians();
        let position = Vec3::new(yaw.sin() * MENU_RADIUS, 1.2, -yaw.cos() * MENU_RADIUS);

        let name = label.to_string();
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(ORB_RADIUS))),
            MeshMaterial3d(materials.add(*color)),
            Transform::from_translation(position),
            MenuOrb {
                base_position: position,
                phase: rng.gen_range(0.0..PI * 2.0),
            },
            RadialItem::new(*label).with_action(move || info!("{} opened", name)),
        ));
    }
}

/// System: Gentle vertical bob for the menu orbs
pub fn menu_bob_system(time: Res<Time>, mut orb_query: Query<(&MenuOrb, &mut Transform)>) {
    for (orb, mut transform) in orb_query.iter_mut() {
        let bob = (time.elapsed_secs() * ORB_BOB_SPEED + orb.phase).sin() * ORB_BOB_AMPLITUDE;
        transform.translation = orb.base_position + Vec3::Y * bob;
    }
}
