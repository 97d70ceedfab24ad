//! Cross-thread tree injection.
//!
//! Producers (a partitioner thread, a network listener) hand finished
//! trees to the renderer through an unbounded channel instead of a
//! shared mutable slot. The renderer drains the channel once per frame
//! and keeps only the newest tree, so a replacement submitted between
//! two frames is visible in the very next frame and intermediate
//! submissions are coalesced away.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::tree::SpatialTree;

/// Producer endpoint: submit a new tree from any thread.
#[derive(Clone)]
pub struct TreeSender {
  tx: Sender<SpatialTree>,
}

impl TreeSender {
  /// Replace the current tree. Never blocks.
  ///
  /// Returns false if the render side has been dropped.
  pub fn send(&self, tree: SpatialTree) -> bool {
    self.tx.send(tree).is_ok()
  }
}

/// Renderer endpoint: drained once per frame.
pub struct TreeInbox {
  rx: Receiver<SpatialTree>,
}

impl TreeInbox {
  /// Drain all pending submissions and return only the newest.
  ///
  /// Returns None when nothing was submitted since the last drain.
  pub fn latest(&self) -> Option<SpatialTree> {
    self.rx.try_iter().last()
  }
}

/// Create a connected sender/inbox pair.
pub fn tree_channel() -> (TreeSender, TreeInbox) {
  let (tx, rx) = unbounded();
  (TreeSender { tx }, TreeInbox { rx })
}
