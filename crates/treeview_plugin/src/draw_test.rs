use glam::Vec3;

use super::*;
use crate::aabb::Aabb3;
use crate::palette::{BLUE, GREEN, RED};
use crate::tree::TreeNode;

fn octant_child(parent: &Aabb3, octant: u8, depth: u32) -> TreeNode {
  let center = parent.center();
  let he = parent.half_extents() * 0.5;
  let offset = Vec3::new(
    if octant & 1 != 0 { he.x } else { -he.x },
    if octant & 2 != 0 { he.y } else { -he.y },
    if octant & 4 != 0 { he.z } else { -he.z },
  );
  TreeNode::leaf(Aabb3::from_center_half_extents(center + offset, he), depth)
}

#[test]
fn test_absent_root_draws_nothing() {
  let commands = build_draw_list(&SpatialTree::empty(), &DepthPalette::default());
  assert!(commands.is_empty());
}

/// A root with zero children yields exactly one draw call.
#[test]
fn test_root_only_single_command() {
  let root = TreeNode::leaf(Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0)), 0);
  let commands = build_draw_list(&SpatialTree::new(root), &DepthPalette::default());

  assert_eq!(commands.len(), 1);
  assert_eq!(commands[0].color, RED);
  assert_eq!(commands[0].depth, 0);
}

/// N nodes in, exactly N commands out, none skipped or duplicated.
#[test]
fn test_one_command_per_node() {
  let root_box = Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
  let children: Vec<TreeNode> = (0..8).map(|o| octant_child(&root_box, o, 1)).collect();
  let root = TreeNode::new(root_box, 0, children);
  let tree = SpatialTree::new(root);

  let commands = build_draw_list(&tree, &DepthPalette::default());
  assert_eq!(commands.len(), tree.node_count());
  assert_eq!(commands.len(), 9);
}

/// Commands come out in pre-order: parent first, then children in
/// producer order.
#[test]
fn test_preorder_command_order() {
  let root_box = Aabb3::new(Vec3::splat(-4.0), Vec3::splat(4.0));
  let mut first_child = octant_child(&root_box, 0, 1);
  let grandchild = octant_child(&first_child.aabb, 7, 2);
  first_child.children.push(grandchild);
  let second_child = octant_child(&root_box, 7, 1);

  let root = TreeNode::new(root_box, 0, vec![first_child, second_child]);
  let commands = build_draw_list(&SpatialTree::new(root), &DepthPalette::default());

  let depths: Vec<u32> = commands.iter().map(|c| c.depth).collect();
  assert_eq!(depths, vec![0, 1, 2, 1]);

  let colors: Vec<_> = commands.iter().map(|c| c.color).collect();
  assert_eq!(colors, vec![RED, GREEN, BLUE, GREEN]);
}

/// Root scenario from the rendering contract: unit-radius box at the
/// origin maps to the identity placement and the depth-0 color.
#[test]
fn test_root_scenario_transform() {
  let root = TreeNode::leaf(Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0)), 0);
  let commands = build_draw_list(&SpatialTree::new(root), &DepthPalette::default());

  let (scale, _, translation) = commands[0].model.to_scale_rotation_translation();
  assert!(scale.abs_diff_eq(Vec3::ONE, 1e-6));
  assert!(translation.abs_diff_eq(Vec3::ZERO, 1e-6));
  assert_eq!(commands[0].color, RED);
}

/// A collapsed box (min == max) is still drawn: one command, midpoint
/// translation, depth-derived scale. The box is degenerate, the
/// placement is not.
#[test]
fn test_degenerate_box_still_drawn() {
  let point = Vec3::new(2.0, 4.0, 6.0);
  let node = TreeNode::leaf(Aabb3::new(point, point), 2);
  let commands = build_draw_list(&SpatialTree::new(node), &DepthPalette::default());

  assert_eq!(commands.len(), 1);
  assert_eq!(commands[0].color, BLUE);

  let (scale, _, translation) = commands[0].model.to_scale_rotation_translation();
  assert!(scale.abs_diff_eq(Vec3::splat(0.25), 1e-6));
  assert!(translation.abs_diff_eq(point * 0.995, 1e-6));
}

/// Depth-1 child scenario: half scale, biased midpoint, depth-1 color.
#[test]
fn test_depth_one_scenario_transform() {
  let child = TreeNode::leaf(Aabb3::new(Vec3::ZERO, Vec3::ONE), 1);
  let root = TreeNode::new(
    Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
    0,
    vec![child],
  );
  let commands = build_draw_list(&SpatialTree::new(root), &DepthPalette::default());

  let (scale, _, translation) = commands[1].model.to_scale_rotation_translation();
  assert!(scale.abs_diff_eq(Vec3::splat(0.5), 1e-6));
  assert!(translation.abs_diff_eq(Vec3::splat(0.4975), 1e-6));
  assert_eq!(commands[1].color, GREEN);
}
