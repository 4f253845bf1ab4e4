//! Lakecast - a first-person lake fishing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, lures, fish, catches)
//! - `settings`: Player preferences with LocalStorage persistence
//! - `audio`: Sound cue routing (synthesis stubbed)
//!
//! Rendering is an external collaborator: the simulation consumes input
//! intents and produces snapshots/events for a presentation layer.

pub mod audio;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Player walk speed (units/second)
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Player eye height above the shore
    pub const EYE_HEIGHT: f32 = 1.6;
    /// Horizontal radius beyond which the player is pulled back
    pub const PLAYER_BOUND_RADIUS: f32 = 90.0;
    /// Corrective step toward the origin while out of bounds (units/frame)
    pub const BOUND_PULL_STEP: f32 = 0.5;

    /// Lure launch speed along the look direction (units/second)
    pub const LURE_LAUNCH_SPEED: f32 = 2.0;
    /// Lure lifetime from cast to expiry (seconds)
    pub const LURE_TTL: f32 = 5.0;
    /// Vertical level where lures settle onto the water
    pub const LURE_WATER_LINE: f32 = -1.5;
    /// Vertical velocity multiplier on water contact (inverted, dampened)
    pub const LURE_REBOUND: f32 = -0.5;
    /// Horizontal velocity multiplier on water contact
    pub const LURE_DRAG: f32 = 0.9;

    /// Depth at which fish swim
    pub const FISH_SWIM_DEPTH: f32 = -1.0;
    /// Spawn annulus around the lake center (units)
    pub const FISH_SPAWN_RADIUS_MIN: f32 = 10.0;
    pub const FISH_SPAWN_RADIUS_MAX: f32 = 50.0;
    /// Horizontal radius beyond which fish steer back toward the center
    pub const FISH_SOFT_RADIUS: f32 = 50.0;
    /// Per-frame lerp factor of the center-seeking blend
    pub const FISH_CENTER_BLEND: f32 = 0.2;
    /// Heading re-randomization window (seconds)
    pub const FISH_TURN_MIN: f32 = 2.0;
    pub const FISH_TURN_MAX: f32 = 5.0;
    /// Spawn attempt interval and population limits
    pub const FISH_SPAWN_INTERVAL: f32 = 2.0;
    pub const FISH_INITIAL_COUNT: usize = 5;
    pub const FISH_POPULATION_CAP: usize = 15;

    /// Proximity threshold below which a fish takes a lure
    pub const CATCH_RADIUS: f32 = 2.0;

    /// Loading screen pacing (progress tick interval and post-load linger)
    pub const LOADING_TICK: f32 = 0.2;
    pub const LOADING_LINGER: f32 = 0.5;
}

/// Horizontal (xz-plane) distance of a point from the lake center
#[inline]
pub fn horizontal_distance(pos: Vec3) -> f32 {
    (pos.x * pos.x + pos.z * pos.z).sqrt()
}

/// Unit vector in the xz-plane pointing from `pos` toward the lake center.
/// Zero when `pos` is already on the vertical axis.
#[inline]
pub fn toward_center(pos: Vec3) -> Vec3 {
    Vec3::new(-pos.x, 0.0, -pos.z).normalize_or_zero()
}

/// Yaw angle (radians) of a horizontal direction, for visual facing
#[inline]
pub fn heading_yaw(heading: Vec3) -> f32 {
    heading.x.atan2(heading.z)
}
