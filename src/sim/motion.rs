//! Player motion: intent integration and boundary containment
//!
//! Movement is expressed through camera-relative primitives so the walk
//! direction always follows the current facing. The integrator only talks to
//! the [`MotionApplier`] trait; [`ViewRig`] is the pointer-lock-style
//! implementation the session owns, and a renderer-backed camera could stand
//! in for it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{horizontal_distance, toward_center};

/// Held movement intents. Level-state flags set by key-down/key-up edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Camera-relative movement primitives the integrator drives
pub trait MotionApplier {
    fn position(&self) -> Vec3;
    /// Walk along the horizontal projection of the facing direction
    fn move_forward(&mut self, distance: f32);
    /// Strafe along the horizontal right vector
    fn move_right(&mut self, distance: f32);
    /// Absolute displacement, used by the boundary pull
    fn translate(&mut self, delta: Vec3);
}

/// First-person view rig: position plus yaw/pitch facing.
///
/// Yaw 0 faces +Z; increasing yaw turns toward +X. Pitch is clamped by the
/// input layer, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewRig {
    pub pos: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for ViewRig {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl ViewRig {
    /// Full 3D look direction (unit length), pitch included. Casts launch
    /// along this vector.
    pub fn look_dir(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp)
    }
}

impl MotionApplier for ViewRig {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn move_forward(&mut self, distance: f32) {
        let (sy, cy) = self.yaw.sin_cos();
        self.pos += Vec3::new(sy, 0.0, cy) * distance;
    }

    fn move_right(&mut self, distance: f32) {
        let (sy, cy) = self.yaw.sin_cos();
        self.pos += Vec3::new(cy, 0.0, -sy) * distance;
    }

    fn translate(&mut self, delta: Vec3) {
        self.pos += delta;
    }
}

/// Integrate held intents into a bounded camera-frame displacement.
///
/// The direction vector is normalized before scaling so diagonal movement is
/// no faster than axis-aligned. Returns the camera-local (strafe, walk)
/// displacement actually applied.
pub fn integrate(rig: &mut impl MotionApplier, intents: &MoveIntents, dt: f32) -> (f32, f32) {
    let dir = Vec3::new(
        (intents.right as i8 - intents.left as i8) as f32,
        0.0,
        (intents.forward as i8 - intents.backward as i8) as f32,
    )
    .normalize_or_zero();

    let strafe = dir.x * PLAYER_SPEED * dt;
    let walk = dir.z * PLAYER_SPEED * dt;
    rig.move_forward(walk);
    rig.move_right(strafe);
    (strafe, walk)
}

/// Soft boundary: while the player is outside the bound radius, step a fixed
/// amount back toward the origin. Not a hard wall; overshoot self-corrects
/// over subsequent frames.
pub fn contain(rig: &mut impl MotionApplier) {
    let pos = rig.position();
    if horizontal_distance(pos) > PLAYER_BOUND_RADIUS {
        rig.translate(toward_center(pos) * BOUND_PULL_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_no_intents_no_motion() {
        let mut rig = ViewRig::default();
        let start = rig.pos;
        integrate(&mut rig, &MoveIntents::default(), DT);
        assert_eq!(rig.pos, start);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let mut straight = ViewRig::default();
        integrate(
            &mut straight,
            &MoveIntents {
                forward: true,
                ..Default::default()
            },
            DT,
        );
        let straight_dist = straight.pos.distance(ViewRig::default().pos);

        let mut diagonal = ViewRig::default();
        integrate(
            &mut diagonal,
            &MoveIntents {
                forward: true,
                right: true,
                ..Default::default()
            },
            DT,
        );
        let diagonal_dist = diagonal.pos.distance(ViewRig::default().pos);

        assert!((straight_dist - PLAYER_SPEED * DT).abs() < 1e-5);
        assert!((diagonal_dist - straight_dist).abs() < 1e-5);
    }

    #[test]
    fn test_movement_follows_facing() {
        let mut rig = ViewRig {
            yaw: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        integrate(
            &mut rig,
            &MoveIntents {
                forward: true,
                ..Default::default()
            },
            DT,
        );
        // Facing +X: forward motion moves along x, not z
        assert!(rig.pos.x > 0.0);
        assert!(rig.pos.z.abs() < 1e-5);
    }

    #[test]
    fn test_boundary_pull() {
        let mut rig = ViewRig::default();
        rig.pos = Vec3::new(100.0, EYE_HEIGHT, 0.0);
        contain(&mut rig);
        assert!((rig.pos.x - (100.0 - BOUND_PULL_STEP)).abs() < 1e-5);

        // Inside the radius nothing happens
        let mut inner = ViewRig::default();
        inner.pos = Vec3::new(40.0, EYE_HEIGHT, 0.0);
        contain(&mut inner);
        assert_eq!(inner.pos.x, 40.0);
    }

    #[test]
    fn test_cast_direction_unit_length() {
        let rig = ViewRig {
            yaw: 1.2,
            pitch: -0.4,
            ..Default::default()
        };
        assert!((rig.look_dir().length() - 1.0).abs() < 1e-5);
    }
}
