//! Sound cue routing
//!
//! Playback itself is stubbed: cues are resolved from game events and
//! logged. The manager keeps the volume/mute plumbing so a Web Audio
//! backend can slot in later without touching callers.

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Lure cast
    Cast,
    /// Fish caught
    Catch,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Cast => "cast",
            SoundCue::Catch => "catch",
        }
    }

    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> SoundCue {
        match event {
            GameEvent::Cast { .. } => SoundCue::Cast,
            GameEvent::Caught { .. } => SoundCue::Catch,
        }
    }
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Route a cue to the output. Returns whether the cue was audible.
    pub fn play(&self, cue: SoundCue) -> bool {
        let gain = self.master_volume * self.sfx_volume;
        if self.muted || gain <= 0.0 {
            return false;
        }
        // Synthesis stub: a real backend would schedule an oscillator here
        log::debug!("Playing sound: {}", cue.name());
        true
    }

    /// Play the cue for each drained simulation event
    pub fn play_events(&self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundCue::for_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::LureKind;

    #[test]
    fn test_event_cue_mapping() {
        let cast = GameEvent::Cast {
            kind: LureKind::Jig,
        };
        assert_eq!(SoundCue::for_event(&cast), SoundCue::Cast);
    }

    #[test]
    fn test_muted_routes_nothing() {
        let mut audio = AudioManager::new();
        assert!(audio.play(SoundCue::Cast));
        audio.set_muted(true);
        assert!(!audio.play(SoundCue::Cast));
        audio.set_muted(false);
        audio.set_master_volume(0.0);
        assert!(!audio.play(SoundCue::Catch));
    }
}
