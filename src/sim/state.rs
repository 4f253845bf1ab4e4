//! Session state and core simulation types
//!
//! One [`SessionState`] holds everything the per-frame update mutates. No
//! ambient globals: the update call receives the context explicitly.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::motion::{MotionApplier, ViewRig};
use super::species::{LureKind, Species};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Menu shown, simulation idle (render-only)
    Menu,
    /// Loading screen progress bar running
    Loading,
    /// Active gameplay under pointer capture
    Playing,
}

/// Loading screen progress, advanced on the session clock
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoadingBar {
    /// Percent complete, 0-100
    pub progress: f32,
    /// Accumulator toward the next progress bump
    pub tick_timer: f32,
    /// Linger after reaching 100% before gameplay starts
    pub linger: f32,
}

/// The player: view rig plus last applied camera-local velocity.
/// Velocity is reset every frame before integration; it exists for the
/// presentation layer, not for physics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub rig: ViewRig,
    pub velocity: Vec3,
}

/// A cast lure in flight or settling on the water
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LureProjectile {
    pub id: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub kind: LureKind,
    /// Session clock at cast time; expiry compares against this
    pub cast_at: f32,
}

/// A roaming fish
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FishEntity {
    pub id: u32,
    pub pos: Vec3,
    pub species: Species,
    /// Always unit length, horizontal
    pub heading: Vec3,
    /// Session clock at which the heading re-randomizes
    pub next_turn_at: f32,
}

/// Events produced by the simulation for sound/UI feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Cast { kind: LureKind },
    Caught { species: Species, points: u32 },
}

/// Complete session state. Fish are kept in spawn order and lures in cast
/// order; catch detection depends on that ordering.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: SessionPhase,
    /// Session clock in seconds, accumulated from frame deltas. The only
    /// time source; all timers compare against it.
    pub clock: f32,
    pub score: u32,
    pub fish_caught: u32,
    pub selected_lure: LureKind,
    pub loading: LoadingBar,
    pub player: PlayerState,
    pub fish: Vec<FishEntity>,
    pub lures: Vec<LureProjectile>,
    /// Accumulator toward the next fish spawn attempt
    pub spawn_timer: f32,
    /// Whether the initial fish batch has been stocked
    pub stocked: bool,
    /// Pending events, drained by the presentation layer each frame
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    next_id: u32,
}

impl SessionState {
    /// Create a fresh session. Score and populations reset here and only
    /// here.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: SessionPhase::Menu,
            clock: 0.0,
            score: 0,
            fish_caught: 0,
            selected_lure: LureKind::Basic,
            loading: LoadingBar::default(),
            player: PlayerState::default(),
            fish: Vec::new(),
            lures: Vec::new(),
            spawn_timer: 0.0,
            stocked: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin the loading screen (menu start action)
    pub fn begin_loading(&mut self) {
        self.phase = SessionPhase::Loading;
        self.loading = LoadingBar::default();
        log::info!("Session loading (seed {})", self.seed);
    }

    /// Drop back to the menu; simulation idles but nothing resets
    pub fn release(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.phase = SessionPhase::Menu;
            log::info!("Pointer capture released, back to menu");
        }
    }

    /// Select a lure by index 0-3. Out-of-range indices are ignored.
    pub fn select_lure(&mut self, index: usize) {
        match LureKind::from_index(index) {
            Some(kind) => {
                self.selected_lure = kind;
                log::debug!("Selected lure: {}", kind.name());
            }
            None => log::debug!("Ignoring out-of-range lure index {index}"),
        }
    }

    /// Eye position casts launch from
    pub fn eye_pos(&self) -> Vec3 {
        self.player.rig.position()
    }

    /// Take the pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = SessionState::new(7);
        assert_eq!(state.phase, SessionPhase::Menu);
        assert_eq!(state.score, 0);
        assert!(state.fish.is_empty());
        assert!(state.lures.is_empty());
    }

    #[test]
    fn test_select_lure_bounds() {
        let mut state = SessionState::new(7);
        state.select_lure(2);
        assert_eq!(state.selected_lure, LureKind::Jig);
        // Out of range: silently ignored, no state change
        state.select_lure(9);
        assert_eq!(state.selected_lure, LureKind::Jig);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = SessionState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}
