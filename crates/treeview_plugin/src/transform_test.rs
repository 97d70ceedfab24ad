use glam::{Quat, Vec3};

use super::*;

fn assert_vec3_eq(a: Vec3, b: Vec3) {
  assert!(
    a.abs_diff_eq(b, 1e-6),
    "vectors differ: {:?} vs {:?}",
    a,
    b
  );
}

/// Scale must be exactly 1/2^depth on every axis.
#[test]
fn test_scale_halves_per_depth() {
  for depth in 0..=20u32 {
    let mat = node_transform(Vec3::ZERO, Vec3::ONE, depth);
    let (scale, _, _) = mat.to_scale_rotation_translation();

    let expected = 2f32.powi(-(depth as i32));
    assert_vec3_eq(scale, Vec3::splat(expected));
  }
}

/// Depths past the u64 shift range must still halve exactly, not panic
/// or wrap.
#[test]
fn test_scale_at_extreme_depths() {
  for depth in [63u32, 64, 65, 100] {
    let mat = node_transform(Vec3::ZERO, Vec3::ONE, depth);
    let (scale, _, _) = mat.to_scale_rotation_translation();

    let expected = 2f32.powi(-(depth as i32));
    assert!(expected > 0.0, "oracle should still be representable");
    assert_vec3_eq(scale, Vec3::splat(expected));
  }

  // Beyond f32 range the scale underflows to zero instead of wrapping.
  let mat = node_transform(Vec3::ZERO, Vec3::ONE, 200);
  let (scale, _, _) = mat.to_scale_rotation_translation();
  assert_vec3_eq(scale, Vec3::ZERO);
}

/// Translation must be CENTER_BIAS times the box midpoint, per component.
#[test]
fn test_translation_is_biased_midpoint() {
  let cases = [
    (Vec3::new(-4.0, 2.0, 0.0), Vec3::new(4.0, 6.0, 10.0)),
    (Vec3::splat(-1.0), Vec3::splat(1.0)),
    (Vec3::new(100.0, -50.0, 3.0), Vec3::new(101.0, -49.0, 4.0)),
  ];

  for (min, max) in cases {
    let mat = node_transform(min, max, 3);
    let (_, _, translation) = mat.to_scale_rotation_translation();
    assert_vec3_eq(translation, (min + max) * 0.5 * CENTER_BIAS);
  }
}

/// Rotation component must always be identity.
#[test]
fn test_rotation_is_identity() {
  for depth in 0..8u32 {
    let mat = node_transform(Vec3::new(-3.0, 1.0, 2.0), Vec3::new(5.0, 9.0, 4.0), depth);
    let (_, rotation, _) = mat.to_scale_rotation_translation();
    assert!(
      rotation.abs_diff_eq(Quat::IDENTITY, 1e-6),
      "rotation should be identity, got {:?}",
      rotation
    );
  }
}

/// Root box centered at the origin: identity scale, zero translation.
#[test]
fn test_root_scenario() {
  let mat = node_transform(Vec3::splat(-1.0), Vec3::splat(1.0), 0);
  let (scale, rotation, translation) = mat.to_scale_rotation_translation();

  assert_vec3_eq(scale, Vec3::ONE);
  assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
  assert_vec3_eq(translation, Vec3::ZERO);
}

/// Depth-1 child in the +X+Y+Z octant of the unit-radius root.
#[test]
fn test_depth_one_child_scenario() {
  let mat = node_transform(Vec3::ZERO, Vec3::ONE, 1);
  let (scale, _, translation) = mat.to_scale_rotation_translation();

  assert_vec3_eq(scale, Vec3::splat(0.5));
  assert_vec3_eq(translation, Vec3::splat(0.4975));
}

/// The matrix must map cube corners to scaled+translated positions with
/// no rotational mixing of axes.
#[test]
fn test_corner_mapping() {
  let mat = node_transform(Vec3::ZERO, Vec3::ONE, 1);
  let corner = Vec3::new(1.0, -1.0, 1.0);
  let mapped = mat.transform_point3(corner);

  assert_vec3_eq(mapped, corner * 0.5 + Vec3::splat(0.4975));
}
