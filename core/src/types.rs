use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Time unit for every delay and duration in the crate.
pub type Millis = u32;

/// The two mount-scoped timers of a reveal session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    AutoOpen,
    Reveal,
}

impl TimerKind {
    pub const ALL: [TimerKind; 2] = [TimerKind::AutoOpen, TimerKind::Reveal];

    pub const fn index(self) -> usize {
        match self {
            Self::AutoOpen => 0,
            Self::Reveal => 1,
        }
    }

    pub(crate) const fn flag(self) -> PendingTimers {
        match self {
            Self::AutoOpen => PendingTimers::AUTO_OPEN,
            Self::Reveal => PendingTimers::REVEAL,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PendingTimers: u8 {
        const AUTO_OPEN = 1;
        const REVEAL    = 1 << 1;
    }
}

/// What caused the envelope to open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenTrigger {
    Auto,
    Pointer,
    Keyboard,
}

impl OpenTrigger {
    pub const fn is_user(self) -> bool {
        !matches!(self, Self::Auto)
    }
}

/// Side effect requested by the sequencer. The host owns the real timers and
/// the audio element; the sequencer only says what to do with them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Schedule { timer: TimerKind, after: Millis },
    Cancel(TimerKind),
    StartAudio,
}

pub type Commands = SmallVec<[Command; 2]>;
