//! Single-slot debounce timer.
//!
//! The controller owns exactly one pending task at a time; scheduling a new
//! task cancels and replaces the previous one, so a burst of input events
//! collapses into the last event's task. The slot is instance state, never
//! module-level, so independent controllers (and tests) cannot interfere.

/// Schedules one-shot tasks. Dropping the returned handle cancels the task
/// if it has not fired yet.
pub trait TimerHost {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// A single-slot holder of a scheduled task.
pub struct Debouncer<H: TimerHost> {
    host: H,
    delay_ms: u32,
    pending: Option<H::Handle>,
}

impl<H: TimerHost> Debouncer<H> {
    pub fn new(host: H, delay_ms: u32) -> Self {
        Self {
            host,
            delay_ms,
            pending: None,
        }
    }

    /// Restart the window with a new task, cancelling any pending one.
    pub fn debounce(&mut self, task: impl FnOnce() + 'static) {
        // Drop the old handle first so its task can never fire alongside
        // the new one.
        self.pending = None;
        self.pending = Some(self.host.schedule(self.delay_ms, Box::new(task)));
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Browser timer host backed by `gloo` timeouts.
#[derive(Debug, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}
