//! Camera rig for the backdrop view.
//!
//! The rig sits at a fixed depth and eases its x/y toward a target derived
//! from the normalized pointer position, always looking back at the origin.
//! Exponential smoothing keeps the motion soft no matter how fast the
//! pointer moves.

use glam::{Mat4, Vec2, Vec3};

/// How far pointer deflection pushes the rig, in world units per unit of
/// normalized pointer travel.
const POINTER_REACH: f32 = 5.0;

/// Exponential smoothing factor applied each frame.
const EASE_FACTOR: f32 = 0.02;

/// Eased camera rig looking at the origin.
#[derive(Debug, Clone)]
pub struct Rig {
    /// Current world position. z stays fixed at the viewing distance.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane.
    pub z_near: f32,
    /// Far clip plane.
    pub z_far: f32,
}

impl Rig {
    /// Create a rig at the default viewing distance.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 30.0),
            fov_y_degrees: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    /// Ease one frame toward the pointer-derived target:
    /// `new = old + (pointer * reach - old) * 0.02` on x and y.
    pub fn ease_toward(&mut self, pointer: Vec2) {
        let target = pointer * POINTER_REACH;
        self.position.x += (target.x - self.position.x) * EASE_FACTOR;
        self.position.y += (target.y - self.position.y) * EASE_FACTOR;
    }

    /// View matrix: look from the rig position at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    /// Combined view-projection matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            aspect,
            self.z_near,
            self.z_far,
        );
        proj * self.view_matrix()
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_converges_monotonically() {
        let mut rig = Rig::new();
        let pointer = Vec2::new(1.0, 1.0);

        let mut last_dist = (Vec2::new(5.0, 5.0)
            - Vec2::new(rig.position.x, rig.position.y))
        .length();
        for _ in 0..2000 {
            rig.ease_toward(pointer);
            let dist =
                (Vec2::new(5.0, 5.0) - Vec2::new(rig.position.x, rig.position.y)).length();
            assert!(dist <= last_dist, "distance grew: {last_dist} -> {dist}");
            last_dist = dist;
        }
        assert!(last_dist < 0.01, "did not converge, still {last_dist} away");
    }

    #[test]
    fn test_easing_leaves_depth_fixed() {
        let mut rig = Rig::new();
        for _ in 0..100 {
            rig.ease_toward(Vec2::new(-1.0, 0.5));
        }
        assert_eq!(rig.position.z, 30.0);
    }

    #[test]
    fn test_single_step_factor() {
        let mut rig = Rig::new();
        rig.ease_toward(Vec2::new(1.0, 0.0));
        // One step from 0 toward 5 at factor 0.02.
        assert!((rig.position.x - 0.1).abs() < 1e-6);
        assert_eq!(rig.position.y, 0.0);
    }
}
