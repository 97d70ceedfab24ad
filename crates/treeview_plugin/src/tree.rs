//! Spatial tree data model.
//!
//! The tree is produced elsewhere (a spatial partitioner, a BVH builder)
//! and handed to the renderer as plain data: each node carries its
//! bounding box, its depth, and its children. The renderer never owns or
//! mutates the tree; it only walks it once per frame.

use smallvec::SmallVec;

use crate::aabb::Aabb3;

/// One element of the spatial tree.
///
/// Depth is assigned by the producer (root = 0) and drives both the cube
/// scale and the wireframe color. A leaf is simply a node with no
/// children.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
  /// World-space bounding box of this node.
  pub aabb: Aabb3,
  /// Depth in the tree (root = 0).
  pub depth: u32,
  /// Child nodes, in producer order. Empty for leaves.
  pub children: Vec<TreeNode>,
}

impl TreeNode {
  /// Create a node with children.
  pub fn new(aabb: Aabb3, depth: u32, children: Vec<TreeNode>) -> Self {
    Self {
      aabb,
      depth,
      children,
    }
  }

  /// Create a leaf node (no children).
  pub fn leaf(aabb: Aabb3, depth: u32) -> Self {
    Self {
      aabb,
      depth,
      children: Vec::new(),
    }
  }

  /// Number of nodes in the subtree rooted here (including self).
  pub fn node_count(&self) -> usize {
    1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
  }

  /// Deepest depth value present in the subtree rooted here.
  pub fn max_depth(&self) -> u32 {
    self
      .children
      .iter()
      .map(TreeNode::max_depth)
      .max()
      .unwrap_or(self.depth)
  }

  /// Iterate the subtree pre-order: self first, then each child's
  /// subtree in declaration order.
  ///
  /// Explicit stack walk. Children are pushed in reverse so pop order
  /// matches sibling order.
  pub fn iter_preorder(&self) -> PreorderIter<'_> {
    let mut stack = SmallVec::new();
    stack.push(self);
    PreorderIter { stack }
  }
}

/// Pre-order iterator over a subtree.
///
/// The stack stays inline for trees shallower than 16 pending nodes,
/// which covers the color table's depth range without allocating.
pub struct PreorderIter<'a> {
  stack: SmallVec<[&'a TreeNode; 16]>,
}

impl<'a> Iterator for PreorderIter<'a> {
  type Item = &'a TreeNode;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.stack.pop()?;
    self.stack.extend(node.children.iter().rev());
    Some(node)
  }
}

/// The current tree to draw: a single optional root.
///
/// An absent root means there is nothing to draw this frame; that is a
/// normal state, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpatialTree {
  /// Root node, if a tree has been injected.
  pub root: Option<TreeNode>,
}

impl SpatialTree {
  /// Create an empty tree (nothing drawn).
  pub fn empty() -> Self {
    Self { root: None }
  }

  /// Create a tree from a root node.
  pub fn new(root: TreeNode) -> Self {
    Self { root: Some(root) }
  }

  /// Check whether there is anything to draw.
  pub fn is_empty(&self) -> bool {
    self.root.is_none()
  }

  /// Total number of nodes.
  pub fn node_count(&self) -> usize {
    self.root.as_ref().map_or(0, TreeNode::node_count)
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
