//! Bevy presentation layer for treeview_plugin.
//!
//! This crate bridges the engine-independent tree/draw core with Bevy,
//! drawing each tree node as an immediate-mode gizmo wireframe cube and
//! providing the orbit camera the view is navigated with.

pub mod orbit_camera;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use orbit_camera::{update_orbit_camera, OrbitCamera};
pub use resources::*;
pub use systems::{drain_tree_inbox, draw_tree_wireframes};

/// Bevy plugin for spatial-tree wireframe rendering.
///
/// Registers the current-tree state and the per-frame systems: drain
/// any cross-thread tree submission, then draw the tree. To inject
/// trees from another thread, insert a [`TreeInboxReceiver`] resource
/// and hand the matching sender to the producer; same-thread callers
/// can replace [`CurrentTree`] directly.
pub struct TreeViewPlugin;

impl Plugin for TreeViewPlugin {
	fn build(&self, app: &mut App) {
		app.init_resource::<CurrentTree>()
			.init_resource::<WireframePalette>()
			.add_systems(Update, update_orbit_camera)
			.add_systems(Update, (drain_tree_inbox, draw_tree_wireframes).chain());
	}
}
