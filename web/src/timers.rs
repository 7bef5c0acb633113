use envelope_core::{Millis, TimerKind};
use gloo::timers::callback::Timeout;

/// Armed browser timeouts, one slot per [`TimerKind`].
///
/// Dropping a [`Timeout`] clears it, so emptying a slot cancels its timer and
/// dropping the whole set (when the component goes away) cancels everything.
#[derive(Debug, Default)]
pub(crate) struct TimerSlots {
    slots: [Option<Timeout>; 2],
}

impl TimerSlots {
    pub(crate) fn arm<F>(&mut self, timer: TimerKind, after: Millis, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let previous = self.slots[timer.index()].replace(Timeout::new(after, callback));
        if previous.is_some() {
            log::warn!("{:?} timer re-armed before it fired", timer);
        }
    }

    pub(crate) fn cancel(&mut self, timer: TimerKind) -> bool {
        self.slots[timer.index()].take().is_some()
    }

    /// Forgets the handle of a timer that has just fired.
    pub(crate) fn release(&mut self, timer: TimerKind) {
        if let Some(timeout) = self.slots[timer.index()].take() {
            // Fired from inside the timeout's own closure; dropping it here
            // would free the closure while it runs. Leak it instead, at most
            // once per timer kind per session.
            timeout.forget();
        }
    }
}
