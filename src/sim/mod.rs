//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Session clock accumulated from frame deltas only
//! - Seeded RNG only
//! - Stable iteration order (fish in spawn order, lures in cast order)
//! - No rendering or platform dependencies

pub mod catch;
pub mod motion;
pub mod snapshot;
pub mod species;
pub mod state;
pub mod tick;

pub use catch::{first_lure_in_reach, lure_in_reach};
pub use motion::{MotionApplier, MoveIntents, ViewRig};
pub use snapshot::{FishPose, LurePose, PlayerPose, RenderSnapshot};
pub use species::{LureKind, Species};
pub use state::{
    FishEntity, GameEvent, LoadingBar, LureProjectile, PlayerState, SessionPhase, SessionState,
};
pub use tick::{FrameInput, spawn_fish, tick};
