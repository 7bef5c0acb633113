use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    pub at: Millis,
    pub outcome: StepOutcome,
}

/// Runs a [`RevealSequencer`] against a virtual millisecond clock.
///
/// Plays the role of the browser event loop: it keeps the timers the
/// sequencer asks for, fires them in due order and counts audio starts.
/// Timers due at the same instant fire in the order they were armed.
#[derive(Clone, Debug)]
pub struct VirtualTimeline {
    now: Millis,
    sequencer: RevealSequencer,
    queue: BTreeMap<(Millis, u32), TimerKind>,
    next_seq: u32,
    audio_starts: u32,
    events: Vec<TimelineEvent>,
}

impl VirtualTimeline {
    /// Creates a sequencer with `timing` and mounts it at time zero.
    pub fn mount(timing: RevealTiming) -> Result<Self> {
        let mut timeline = Self {
            now: 0,
            sequencer: RevealSequencer::new(timing),
            queue: BTreeMap::new(),
            next_seq: 0,
            audio_starts: 0,
            events: Vec::new(),
        };
        let commands = timeline.sequencer.mount()?;
        timeline.apply(commands);
        Ok(timeline)
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn state(&self) -> RevealState {
        self.sequencer.state()
    }

    pub fn sequencer(&self) -> &RevealSequencer {
        &self.sequencer
    }

    pub fn audio_starts(&self) -> u32 {
        self.audio_starts
    }

    /// Every state change so far, with the virtual time it happened at.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Time at which `outcome` first happened, if it did.
    pub fn time_of(&self, outcome: StepOutcome) -> Option<Millis> {
        self.events
            .iter()
            .find(|event| event.outcome == outcome)
            .map(|event| event.at)
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Feeds a user interaction at the current virtual time.
    pub fn open(&mut self, trigger: OpenTrigger) -> Result<StepOutcome> {
        let step = self.sequencer.open(trigger)?;
        Ok(self.record(step))
    }

    /// Fires every timer due up to and including `until`, then parks the
    /// clock at `until`.
    pub fn advance_to(&mut self, until: Millis) -> Result<()> {
        while let Some(entry) = self.queue.first_entry() {
            let (due, _) = *entry.key();
            if due > until {
                break;
            }
            let timer = entry.remove();
            self.now = self.now.max(due);
            let step = self.sequencer.fire(timer)?;
            self.record(step);
        }
        self.now = self.now.max(until);
        Ok(())
    }

    pub fn advance_by(&mut self, delta: Millis) -> Result<()> {
        self.advance_to(self.now.saturating_add(delta))
    }

    /// Tears the session down, dropping whatever timers are still queued.
    pub fn unmount(&mut self) {
        let commands = self.sequencer.unmount();
        self.apply(commands);
    }

    fn record(&mut self, step: Step) -> StepOutcome {
        let Step { outcome, commands } = step;
        if outcome.has_update() {
            self.events.push(TimelineEvent {
                at: self.now,
                outcome,
            });
        }
        self.apply(commands);
        outcome
    }

    fn apply(&mut self, commands: Commands) {
        for command in commands {
            match command {
                Command::Schedule { timer, after } => {
                    let due = self.now.saturating_add(after);
                    self.queue.insert((due, self.next_seq), timer);
                    self.next_seq += 1;
                }
                Command::Cancel(timer) => self.queue.retain(|_, queued| *queued != timer),
                Command::StartAudio => self.audio_starts += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_timeline() -> VirtualTimeline {
        VirtualTimeline::mount(RevealTiming::default()).unwrap()
    }

    #[test]
    fn idle_session_opens_at_two_seconds_and_reveals_after_delay() {
        let mut timeline = default_timeline();

        timeline.advance_to(1999).unwrap();
        assert!(!timeline.state().opened);

        timeline.advance_to(2000).unwrap();
        assert!(timeline.state().opened);
        assert!(!timeline.state().revealed);

        timeline.advance_to(2799).unwrap();
        assert!(!timeline.state().revealed);
        assert_eq!(timeline.audio_starts(), 0);

        timeline.advance_to(2800).unwrap();
        assert!(timeline.state().revealed);
        assert!(timeline.state().music_started);
        assert_eq!(timeline.audio_starts(), 1);
        assert_eq!(
            timeline.time_of(StepOutcome::Opened(OpenTrigger::Auto)),
            Some(2000)
        );
        assert_eq!(timeline.time_of(StepOutcome::Revealed), Some(2800));
    }

    #[test]
    fn early_click_wins_over_auto_open() {
        let mut timeline = default_timeline();

        timeline.advance_to(500).unwrap();
        let outcome = timeline.open(OpenTrigger::Pointer).unwrap();
        assert_eq!(outcome, StepOutcome::Opened(OpenTrigger::Pointer));
        assert!(timeline.state().opened);

        timeline.advance_to(5000).unwrap();

        assert_eq!(timeline.time_of(StepOutcome::Revealed), Some(1300));
        assert_eq!(timeline.time_of(StepOutcome::Opened(OpenTrigger::Auto)), None);
        assert_eq!(timeline.events().len(), 2);
        assert_eq!(timeline.audio_starts(), 1);
    }

    #[test]
    fn double_click_reveals_and_plays_once() {
        let mut timeline = default_timeline();

        timeline.advance_to(100).unwrap();
        timeline.open(OpenTrigger::Pointer).unwrap();
        let second = timeline.open(OpenTrigger::Pointer).unwrap();
        assert_eq!(second, StepOutcome::NoChange);

        timeline.advance_to(10_000).unwrap();

        assert_eq!(timeline.audio_starts(), 1);
        assert_eq!(
            timeline
                .events()
                .iter()
                .filter(|event| event.outcome == StepOutcome::Revealed)
                .count(),
            1
        );
    }

    #[test]
    fn click_after_reveal_changes_nothing() {
        let mut timeline = default_timeline();
        timeline.advance_to(3000).unwrap();

        assert_eq!(
            timeline.open(OpenTrigger::Keyboard).unwrap(),
            StepOutcome::NoChange
        );
        assert_eq!(timeline.audio_starts(), 1);
    }

    #[test]
    fn unmount_during_auto_open_wait_leaves_state_untouched() {
        let mut timeline = default_timeline();
        timeline.advance_to(1000).unwrap();

        timeline.unmount();
        timeline.advance_to(10_000).unwrap();

        assert_eq!(timeline.state(), RevealState::default());
        assert_eq!(timeline.next_due(), None);
        assert_eq!(timeline.audio_starts(), 0);
    }

    #[test]
    fn unmount_during_opening_cancels_reveal() {
        let mut timeline = default_timeline();
        timeline.open(OpenTrigger::Pointer).unwrap();
        timeline.advance_to(400).unwrap();

        timeline.unmount();
        timeline.advance_to(10_000).unwrap();

        assert!(timeline.state().opened);
        assert!(!timeline.state().revealed);
        assert_eq!(timeline.audio_starts(), 0);
        assert_eq!(
            timeline.open(OpenTrigger::Pointer),
            Err(RevealError::Unmounted)
        );
    }

    #[test]
    fn without_auto_open_nothing_happens_until_clicked() {
        let mut timeline = VirtualTimeline::mount(RevealTiming::new(None, 800)).unwrap();

        timeline.advance_to(60_000).unwrap();
        assert!(!timeline.state().opened);

        timeline.open(OpenTrigger::Pointer).unwrap();
        timeline.advance_by(800).unwrap();
        assert!(timeline.state().revealed);
        assert_eq!(timeline.time_of(StepOutcome::Revealed), Some(60_800));
    }

    #[test]
    fn zero_delays_collapse_into_one_instant() {
        let mut timeline = VirtualTimeline::mount(RevealTiming::new(Some(0), 0)).unwrap();

        timeline.advance_to(0).unwrap();

        assert!(timeline.state().revealed);
        assert_eq!(timeline.now(), 0);
        assert_eq!(timeline.audio_starts(), 1);
    }
}
