use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevealPhase {
    #[default]
    Closed,
    Opening,
    Revealed,
}

impl RevealPhase {
    pub const fn is_opened(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    Unmounted,
}

/// Drives the envelope from `Closed` through `Opening` to `Revealed`.
///
/// The sequencer never touches a clock. Every transition returns the
/// [`Command`]s the host must carry out (arm or drop a timer, start the
/// music), and timer expiry comes back in through [`RevealSequencer::fire`].
/// Phases only move forward, so a late auto-open or a double click can never
/// replay the sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSequencer {
    timing: RevealTiming,
    phase: RevealPhase,
    trigger: Option<OpenTrigger>,
    audio: AudioGate,
    lifecycle: Lifecycle,
    pending: PendingTimers,
}

impl RevealSequencer {
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            timing,
            phase: Default::default(),
            trigger: None,
            audio: Default::default(),
            lifecycle: Default::default(),
            pending: PendingTimers::empty(),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    pub fn trigger(&self) -> Option<OpenTrigger> {
        self.trigger
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn pending(&self) -> PendingTimers {
        self.pending
    }

    pub fn state(&self) -> RevealState {
        RevealState {
            opened: self.phase.is_opened(),
            revealed: self.phase.is_revealed(),
            music_started: self.audio.is_started(),
        }
    }

    /// Starts the session and arms the auto-open timer when enabled.
    pub fn mount(&mut self) -> Result<Commands> {
        match self.lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Mounted => return Err(RevealError::AlreadyMounted),
            Lifecycle::Unmounted => return Err(RevealError::Unmounted),
        }
        self.lifecycle = Lifecycle::Mounted;

        let mut commands = Commands::new();
        match self.timing.auto_open_after() {
            Some(after) => {
                log::debug!("auto-open armed for {}ms", after);
                self.schedule(&mut commands, TimerKind::AutoOpen, after);
            }
            None => log::debug!("auto-open disabled"),
        }
        Ok(commands)
    }

    /// Opens the envelope. A second call, from any trigger, is a no-op.
    pub fn open(&mut self, trigger: OpenTrigger) -> Result<Step> {
        self.check_mounted()?;

        if self.phase.is_opened() {
            log::trace!("open({:?}) ignored, already {:?}", trigger, self.phase);
            return Ok(Step::unchanged());
        }

        self.phase = RevealPhase::Opening;
        self.trigger = Some(trigger);
        log::debug!("envelope opened by {:?}", trigger);

        let mut commands = Commands::new();
        if self.pending.contains(PendingTimers::AUTO_OPEN) {
            self.cancel(&mut commands, TimerKind::AutoOpen);
        }
        self.schedule(&mut commands, TimerKind::Reveal, self.timing.reveal_delay_ms);

        Ok(Step {
            outcome: StepOutcome::Opened(trigger),
            commands,
        })
    }

    /// Handles expiry of `timer`. Timers that were cancelled or never armed
    /// are ignored.
    pub fn fire(&mut self, timer: TimerKind) -> Result<Step> {
        self.check_mounted()?;

        if matches!(timer, TimerKind::Reveal) && !self.phase.is_opened() {
            return Err(RevealError::RevealBeforeOpen);
        }

        if !self.pending.contains(timer.flag()) {
            log::trace!("stale {:?} timer ignored", timer);
            return Ok(Step::unchanged());
        }
        self.pending.remove(timer.flag());
        log::trace!("{:?} timer fired", timer);

        match timer {
            TimerKind::AutoOpen => self.open(OpenTrigger::Auto),
            TimerKind::Reveal => Ok(self.reveal()),
        }
    }

    /// Ends the session. Returns a cancellation for every timer still armed;
    /// afterwards every stimulus is rejected.
    pub fn unmount(&mut self) -> Commands {
        let mut commands = Commands::new();
        for timer in TimerKind::ALL {
            if self.pending.contains(timer.flag()) {
                self.cancel(&mut commands, timer);
            }
        }
        if !matches!(self.lifecycle, Lifecycle::Unmounted) {
            log::debug!("unmounted in {:?}", self.phase);
        }
        self.lifecycle = Lifecycle::Unmounted;
        commands
    }

    fn reveal(&mut self) -> Step {
        if self.phase.is_revealed() {
            return Step::unchanged();
        }
        self.phase = RevealPhase::Revealed;
        log::debug!("invitation revealed");

        let mut commands = Commands::new();
        if self.audio.try_start() {
            commands.push(Command::StartAudio);
        }

        Step {
            outcome: StepOutcome::Revealed,
            commands,
        }
    }

    fn schedule(&mut self, commands: &mut Commands, timer: TimerKind, after: Millis) {
        self.pending.insert(timer.flag());
        commands.push(Command::Schedule { timer, after });
    }

    fn cancel(&mut self, commands: &mut Commands, timer: TimerKind) {
        self.pending.remove(timer.flag());
        commands.push(Command::Cancel(timer));
    }

    fn check_mounted(&self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Mounted => Ok(()),
            Lifecycle::Created => Err(RevealError::NotMounted),
            Lifecycle::Unmounted => Err(RevealError::Unmounted),
        }
    }
}
