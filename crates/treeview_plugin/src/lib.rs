//! treeview_plugin - Framework/engine independent spatial-tree wireframe core
//!
//! This crate turns a spatial tree (an octree-like bounding-volume
//! hierarchy) into a flat list of wireframe-cube draw commands. Engine
//! bridges consume the list and submit one line-primitive cube per node.
//!
//! # Pipeline
//!
//! 1. A producer builds a [`SpatialTree`] and hands it over, either
//!    directly or through the cross-thread [`inbox`] channel.
//! 2. Once per frame, [`draw::build_draw_list`] walks the tree pre-order
//!    and emits one [`DrawCommand`] per node: a model matrix derived from
//!    the node's bounding box and depth, plus a depth-indexed color.
//! 3. The engine bridge renders the shared [`cube`] edge mesh with each
//!    command's transform and color.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use treeview_plugin::{build_draw_list, Aabb3, DepthPalette, SpatialTree, TreeNode};
//!
//! let root = TreeNode::leaf(Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0)), 0);
//! let tree = SpatialTree::new(root);
//!
//! let commands = build_draw_list(&tree, &DepthPalette::default());
//! assert_eq!(commands.len(), 1);
//! ```

pub mod aabb;
pub mod cube;
pub mod draw;
pub mod inbox;
pub mod palette;
pub mod transform;
pub mod tree;

// Re-export commonly used items
pub use aabb::Aabb3;
pub use cube::{CUBE_CORNERS, CUBE_EDGES};
pub use draw::{build_draw_list, DrawCommand};
pub use inbox::{tree_channel, TreeInbox, TreeSender};
pub use palette::{DepthPalette, OverflowPolicy, PaletteError, Rgb, DEPTH_COLORS};
pub use transform::{node_transform, CENTER_BIAS};
pub use tree::{SpatialTree, TreeNode};
