//! Draw-list builder: tree in, wireframe cube instances out.
//!
//! One pass per frame. The walk is pre-order (parent before children,
//! siblings in producer order) and synchronous; the frame's draw batch
//! is complete when the function returns.

use glam::Mat4;

use crate::palette::{DepthPalette, Rgb};
use crate::transform::node_transform;
use crate::tree::SpatialTree;

/// One wireframe cube instance: model matrix plus flat color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
  /// Model matrix for the shared unit cube.
  pub model: Mat4,
  /// Flat wireframe color.
  pub color: Rgb,
  /// Source node depth (handy for filtering/debug overlays).
  pub depth: u32,
}

/// Build the frame's draw list from the current tree.
///
/// Emits exactly one command per reachable node, in pre-order. An
/// absent root yields an empty list.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "draw::build_draw_list")
)]
pub fn build_draw_list(tree: &SpatialTree, palette: &DepthPalette) -> Vec<DrawCommand> {
  let Some(root) = &tree.root else {
    return Vec::new();
  };

  let mut commands = Vec::with_capacity(root.node_count());
  for node in root.iter_preorder() {
    commands.push(DrawCommand {
      model: node_transform(node.aabb.min, node.aabb.max, node.depth),
      color: palette.color(node.depth),
      depth: node.depth,
    });
  }
  commands
}

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;
