use std::time::{Duration, Instant};

use crate::config::CanvasSize;

/// Which ticks are due on a given poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueTicks {
    pub render: bool,
    pub simulate: bool,
}

/// Paces render and simulation ticks at independent target rates.
///
/// Polled from a per-frame callback; a tick fires once its deadline has
/// passed and is then rescheduled one interval after the poll time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    render_interval: Duration,
    simulation_interval: Duration,
    next_render: Instant,
    next_simulation: Instant,
}

impl FrameClock {
    /// Creates a clock whose first ticks are due after `start`.
    #[must_use]
    pub fn new(render_hz: u32, simulation_hz: u32, start: Instant) -> Self {
        Self {
            render_interval: interval(render_hz),
            simulation_interval: interval(simulation_hz),
            next_render: start,
            next_simulation: start,
        }
    }

    pub fn poll(&mut self, now: Instant) -> DueTicks {
        let mut due = DueTicks::default();
        if self.next_render < now {
            due.render = true;
            self.next_render = now + self.render_interval;
        }
        if self.next_simulation < now {
            due.simulate = true;
            self.next_simulation = now + self.simulation_interval;
        }
        due
    }
}

fn interval(hz: u32) -> Duration {
    Duration::from_secs(1) / hz.max(1)
}

/// Coalesces bursts of resize events into one resize after a quiet period.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(Instant, CanvasSize)>,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a resize, pushing the deadline `delay` past `now`.
    pub fn notify(&mut self, size: CanvasSize, now: Instant) {
        self.pending = Some((now + self.delay, size));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the latest size once the deadline has passed without further
    /// resize events.
    pub fn poll(&mut self, now: Instant) -> Option<CanvasSize> {
        match self.pending {
            Some((deadline, size)) if deadline <= now => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }
}
