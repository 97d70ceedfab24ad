//! Node bounding box + depth → model matrix.

use glam::{Mat4, Quat, Vec3};

/// Inward bias applied to every cube translation.
///
/// Pulls each cube 0.5% toward the origin so coincident faces of
/// sibling wireframes do not land on exactly the same lines.
pub const CENTER_BIAS: f32 = 0.995;

/// Compute the model matrix placing the unit wireframe cube for a node.
///
/// - Uniform scale `1 / 2^depth` on all axes. The scale is derived from
///   depth alone, not from the box extents: this assumes the producer
///   subdivides by exactly half per level (octree convention). Trees
///   that subdivide non-uniformly will render cubes that do not match
///   their boxes.
/// - Translation `CENTER_BIAS * midpoint(min, max)`.
/// - Rotation is always identity.
///
/// Pure and deterministic; no error conditions. Scale is computed in
/// floating point, so any depth is accepted; extreme depths underflow
/// to zero rather than overflowing.
#[inline]
pub fn node_transform(min: Vec3, max: Vec3, depth: u32) -> Mat4 {
  let scale = (-(depth as f32)).exp2();
  let center = (min + max) * 0.5;
  Mat4::from_scale_rotation_translation(
    Vec3::splat(scale),
    Quat::IDENTITY,
    center * CENTER_BIAS,
  )
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
