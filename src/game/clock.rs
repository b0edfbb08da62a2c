use std::cell::Cell;
use std::time::Instant;

/// Monotonic source of elapsed milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `Instant`, counting from construction
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Measures the time between consecutive ticks
pub struct FrameTimer<C: Clock> {
    clock: C,
    last_tick_ms: f64,
}

impl<C: Clock> FrameTimer<C> {
    pub fn new(clock: C) -> Self {
        let last_tick_ms = clock.now_ms();
        Self {
            clock,
            last_tick_ms,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Forget the time spent outside the loop (menus, pauses)
    pub fn reset(&mut self) {
        self.last_tick_ms = self.clock.now_ms();
    }

    /// Milliseconds since the previous lap
    pub fn lap(&mut self) -> f64 {
        let now = self.clock.now_ms();
        let elapsed = (now - self.last_tick_ms).max(0.0);
        self.last_tick_ms = now;
        elapsed
    }
}
