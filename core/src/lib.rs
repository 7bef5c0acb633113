#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use audio::*;
pub use config::*;
pub use error::*;
pub use scene::*;
pub use sequencer::*;
pub use timeline::*;
pub use types::*;

mod audio;
mod config;
mod error;
mod scene;
mod sequencer;
mod timeline;
mod types;

/// Boolean view of a reveal session, as seen from the outside.
///
/// Always derived from a [`RevealSequencer`], never stored, so
/// `revealed ⇒ opened` and `music_started ⇒ revealed` hold for every
/// snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    pub opened: bool,
    pub revealed: bool,
    pub music_started: bool,
}

impl RevealState {
    pub const fn is_consistent(self) -> bool {
        (!self.revealed || self.opened) && (!self.music_started || self.revealed)
    }

    /// True when no field of `self` went back to `false` compared to `earlier`.
    pub const fn follows(self, earlier: Self) -> bool {
        (self.opened || !earlier.opened)
            && (self.revealed || !earlier.revealed)
            && (self.music_started || !earlier.music_started)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    NoChange,
    Opened(OpenTrigger),
    Revealed,
}

impl StepOutcome {
    pub const fn has_update(self) -> bool {
        use StepOutcome::*;
        match self {
            NoChange => false,
            Opened(_) => true,
            Revealed => true,
        }
    }
}

/// Result of feeding one stimulus into the sequencer: what changed, and what
/// the host has to do about it.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub outcome: StepOutcome,
    pub commands: Commands,
}

impl Step {
    pub fn unchanged() -> Self {
        Self {
            outcome: StepOutcome::NoChange,
            commands: Commands::new(),
        }
    }

    pub const fn has_update(&self) -> bool {
        self.outcome.has_update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_rejects_reveal_without_open() {
        let state = RevealState {
            opened: false,
            revealed: true,
            music_started: false,
        };
        assert!(!state.is_consistent());
    }

    #[test]
    fn consistency_rejects_music_before_reveal() {
        let state = RevealState {
            opened: true,
            revealed: false,
            music_started: true,
        };
        assert!(!state.is_consistent());
        assert!(RevealState::default().is_consistent());
    }

    #[test]
    fn follows_detects_regression() {
        let opened = RevealState {
            opened: true,
            ..Default::default()
        };
        assert!(opened.follows(RevealState::default()));
        assert!(!RevealState::default().follows(opened));
    }
}
