//! Demo: draws a randomly subdivided octree as colored wireframes.
//!
//! Drag (left or right button) orbits, scroll zooms. The sample tree is
//! regenerated on every launch.

use bevy::prelude::*;
use glam::Vec3 as CoreVec3;
use rand::rngs::ThreadRng;
use rand::Rng;
use treeview_bevy::{CurrentTree, OrbitCamera, TreeViewPlugin};
use treeview_plugin::{Aabb3, SpatialTree, TreeNode};

/// Deepest level the sample generator subdivides to. Stays inside the
/// depth color table.
const MAX_DEPTH: u32 = 5;

/// Chance that a depth-0 octant subdivides; decays with depth.
const SUBDIVIDE_CHANCE: f64 = 0.9;

fn main() {
  App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "treeview demo".into(),
        ..default()
      }),
      ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .add_plugins(TreeViewPlugin)
    .add_systems(Startup, setup_scene)
    .run();
}

/// Spawn the camera and inject the sample tree.
fn setup_scene(mut commands: Commands, mut current: ResMut<CurrentTree>) {
  commands.spawn((
    Camera3d::default(),
    Transform::from_xyz(0.0, 0.0, 5.0),
    OrbitCamera {
      distance: 5.0,
      pitch: -0.4,
      ..default()
    },
  ));

  let mut rng = rand::rng();
  let root_box = Aabb3::new(CoreVec3::splat(-1.0), CoreVec3::splat(1.0));
  let root = subdivide(root_box, 0, &mut rng);
  let tree = SpatialTree::new(root);

  info!("sample tree: {} nodes", tree.node_count());
  current.set(tree);
}

/// Recursively build a node, randomly splitting it into 8 octants.
///
/// Children halve the box per level, matching the depth-derived cube
/// scale the renderer assumes.
fn subdivide(aabb: Aabb3, depth: u32, rng: &mut ThreadRng) -> TreeNode {
  let chance = SUBDIVIDE_CHANCE * 0.7f64.powi(depth as i32);
  if depth >= MAX_DEPTH || !rng.random_bool(chance) {
    return TreeNode::leaf(aabb, depth);
  }

  let center = aabb.center();
  let he = aabb.half_extents() * 0.5;
  let children = (0..8u8)
    .map(|octant| {
      let offset = CoreVec3::new(
        if octant & 1 != 0 { he.x } else { -he.x },
        if octant & 2 != 0 { he.y } else { -he.y },
        if octant & 4 != 0 { he.z } else { -he.z },
      );
      let child_box = Aabb3::from_center_half_extents(center + offset, he);
      subdivide(child_box, depth + 1, rng)
    })
    .collect();

  TreeNode::new(aabb, depth, children)
}
