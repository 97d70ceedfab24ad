//! Bevy resources holding the tree-view state.

use bevy::prelude::*;
use treeview_plugin::{DepthPalette, SpatialTree, TreeInbox};

/// The tree drawn this frame.
///
/// Explicit ECS state instead of a process-wide slot: replaced
/// wholesale on injection, read once per frame by the draw system.
/// Starts empty, which draws nothing.
#[derive(Resource, Default)]
pub struct CurrentTree(pub SpatialTree);

impl CurrentTree {
  /// Replace the current tree. Takes effect on the next frame's draw.
  pub fn set(&mut self, tree: SpatialTree) {
    self.0 = tree;
  }

  /// Clear the tree; subsequent frames draw nothing.
  pub fn clear(&mut self) {
    self.0 = SpatialTree::empty();
  }
}

/// Receiver half of the cross-thread injection channel.
///
/// Optional: only inserted by apps whose tree producer runs off the
/// main thread. Drained by [`crate::systems::drain_tree_inbox`].
#[derive(Resource)]
pub struct TreeInboxReceiver(pub TreeInbox);

/// Depth palette used for wireframe colors, with its overflow policy.
#[derive(Resource, Default)]
pub struct WireframePalette(pub DepthPalette);
