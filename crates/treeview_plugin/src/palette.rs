//! Depth-indexed wireframe colors.
//!
//! Each tree depth maps to a fixed RGB triple so sibling levels are
//! visually distinguishable. The table covers depths 0..=9; deeper
//! nodes are handled by an explicit [`OverflowPolicy`] instead of being
//! left undefined.

use thiserror::Error;

/// RGB color triple, components in [0, 1].
pub type Rgb = [f32; 3];

pub const RED: Rgb = [1.0, 0.0, 0.0];
pub const GREEN: Rgb = [0.0, 1.0, 0.0];
pub const BLUE: Rgb = [0.0, 0.0, 1.0];
pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const CYAN: Rgb = [0.0, 1.0, 1.0];
pub const MAGENTA: Rgb = [1.0, 0.0, 1.0];
pub const YELLOW: Rgb = [1.0, 1.0, 0.0];

/// Wireframe color per depth, depths 0..=9.
pub const DEPTH_COLORS: [Rgb; 10] = [
  RED,     // 0
  GREEN,   // 1
  BLUE,    // 2
  WHITE,   // 3
  CYAN,    // 4
  MAGENTA, // 5
  YELLOW,  // 6
  RED,     // 7
  GREEN,   // 8
  WHITE,   // 9
];

/// What to do for depths beyond the color table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Reuse the last table entry for all deeper nodes.
  #[default]
  Clamp,
  /// Cycle through the table (depth modulo table length).
  Wrap,
}

/// Error for strict color lookups.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
  /// The depth has no entry in the color table.
  #[error("depth {depth} exceeds the color table (max {max})")]
  DepthOutOfRange { depth: u32, max: u32 },
}

/// Depth → color mapping with an explicit out-of-range policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepthPalette {
  /// Fallback behavior for depths beyond the table.
  pub policy: OverflowPolicy,
}

impl DepthPalette {
  /// Create a palette with the given overflow policy.
  pub fn new(policy: OverflowPolicy) -> Self {
    Self { policy }
  }

  /// Look up the color for a depth, applying the overflow policy.
  ///
  /// Debug builds assert that the depth is within the table so overflow
  /// is caught early; release builds silently apply the policy.
  pub fn color(&self, depth: u32) -> Rgb {
    debug_assert!(
      (depth as usize) < DEPTH_COLORS.len(),
      "depth {} beyond color table, applying {:?}",
      depth,
      self.policy
    );
    let idx = match self.policy {
      OverflowPolicy::Clamp => (depth as usize).min(DEPTH_COLORS.len() - 1),
      OverflowPolicy::Wrap => depth as usize % DEPTH_COLORS.len(),
    };
    DEPTH_COLORS[idx]
  }

  /// Strict lookup: error instead of fallback for out-of-table depths.
  pub fn try_color(&self, depth: u32) -> Result<Rgb, PaletteError> {
    DEPTH_COLORS
      .get(depth as usize)
      .copied()
      .ok_or(PaletteError::DepthOutOfRange {
        depth,
        max: DEPTH_COLORS.len() as u32 - 1,
      })
  }
}
