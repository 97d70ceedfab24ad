//! Per-frame systems: inbox drain and wireframe draw.

use bevy::prelude::*;
use treeview_plugin::{build_draw_list, CUBE_CORNERS, CUBE_EDGES};

use crate::resources::{CurrentTree, TreeInboxReceiver, WireframePalette};

/// Apply the newest cross-thread tree submission, if any.
///
/// Runs before the draw system, so a tree submitted between two frames
/// is the one drawn in the very next frame. Intermediate submissions
/// are coalesced; no stale nodes from a replaced tree survive.
pub fn drain_tree_inbox(
  inbox: Option<Res<TreeInboxReceiver>>,
  mut current: ResMut<CurrentTree>,
) {
  let Some(inbox) = inbox else {
    return;
  };
  if let Some(tree) = inbox.0.latest() {
    debug!("tree replaced: {} nodes", tree.node_count());
    current.set(tree);
  }
}

/// Draw the current tree as gizmo line wireframes.
///
/// One cube per node: the shared unit-cube corners are transformed by
/// the node's model matrix and emitted as 12 line primitives in the
/// node's depth color. An empty tree draws nothing and is not an error.
pub fn draw_tree_wireframes(
  current: Res<CurrentTree>,
  palette: Res<WireframePalette>,
  mut gizmos: Gizmos,
) {
  for command in build_draw_list(&current.0, &palette.0) {
    let color = Color::srgb(command.color[0], command.color[1], command.color[2]);

    // Corners in engine space. Conversion goes through arrays so the
    // core's glam version never has to match the engine's.
    let corners: [Vec3; 8] = CUBE_CORNERS.map(|corner| {
      let p = command.model.transform_point3(corner.into());
      Vec3::from_array(p.to_array())
    });

    for edge in CUBE_EDGES {
      gizmos.line(corners[edge[0] as usize], corners[edge[1] as usize], color);
    }
  }
}

#[cfg(test)]
#[path = "systems_test.rs"]
mod systems_test;
