//! Axis-aligned bounding box in single precision.

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Describes the world-space extent of one tree node. The renderer only
/// reads the midpoint; the box extents themselves are never validated
/// against the depth-derived cube scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
  /// Minimum corner (inclusive).
  pub min: Vec3,
  /// Maximum corner (inclusive).
  pub max: Vec3,
}

impl Aabb3 {
  /// Create a new AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Create a new AABB from center and half-extents.
  pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
    Self {
      min: center - half_extents,
      max: center + half_extents,
    }
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  /// Get the center of the AABB.
  #[inline]
  pub fn center(&self) -> Vec3 {
    (self.min + self.max) * 0.5
  }

  /// Get the half-extents of the AABB.
  #[inline]
  pub fn half_extents(&self) -> Vec3 {
    (self.max - self.min) * 0.5
  }

  /// Check whether the box is collapsed (min == max) on some axis.
  ///
  /// Known limitation: degenerate boxes are drawn anyway. Their midpoint
  /// is still well defined, so the cube lands on the collapsed plane with
  /// a depth-derived scale that no longer matches the box extents.
  #[inline]
  pub fn is_degenerate(&self) -> bool {
    let size = self.size();
    size.x == 0.0 || size.y == 0.0 || size.z == 0.0
  }
}
