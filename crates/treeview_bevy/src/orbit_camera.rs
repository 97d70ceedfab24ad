//! Orbit camera controller with drag-to-rotate (left or right button)
//! and scroll zoom.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// Orbit camera component: revolves around a focus point.
#[derive(Component)]
pub struct OrbitCamera {
  /// Point the camera looks at and orbits.
  pub focus: Vec3,
  /// Distance from the focus in world units.
  pub distance: f32,
  /// Current yaw (horizontal rotation) in radians.
  pub yaw: f32,
  /// Current pitch (vertical rotation) in radians.
  pub pitch: f32,
  /// Mouse sensitivity in radians per pixel.
  pub sensitivity: f32,
  /// Zoom factor per scroll line.
  pub zoom_speed: f32,
}

impl Default for OrbitCamera {
  fn default() -> Self {
    Self {
      focus: Vec3::ZERO,
      distance: 5.0,
      yaw: 0.0,
      pitch: 0.0,
      sensitivity: 0.005,
      zoom_speed: 0.1,
    }
  }
}

/// System to update the orbit camera from mouse input.
pub fn update_orbit_camera(
  mouse_button: Res<ButtonInput<MouseButton>>,
  mouse_motion: Res<AccumulatedMouseMotion>,
  mouse_scroll: Res<AccumulatedMouseScroll>,
  mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
  let Ok((mut orbit, mut transform)) = query.single_mut() else {
    return;
  };

  // Orbit (left- or right-click drag)
  if mouse_button.any_pressed([MouseButton::Left, MouseButton::Right]) {
    let delta = mouse_motion.delta;
    orbit.yaw -= delta.x * orbit.sensitivity;
    orbit.pitch -= delta.y * orbit.sensitivity;
    // Clamp pitch to prevent gimbal lock
    orbit.pitch = orbit.pitch.clamp(-1.5, 1.5);
  }

  // Scroll zoom, exponential so it feels uniform at any distance
  let scroll = mouse_scroll.delta.y;
  if scroll != 0.0 {
    orbit.distance *= 1.0 - scroll * orbit.zoom_speed;
    orbit.distance = orbit.distance.clamp(0.05, 10_000.0);
  }

  // Rebuild the transform from spherical coordinates (YXZ euler order)
  let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
  transform.rotation = rotation;
  transform.translation = orbit.focus + rotation * (Vec3::Z * orbit.distance);
}

#[cfg(test)]
#[path = "orbit_camera_test.rs"]
mod orbit_camera_test;
