use rand::Rng;

/// Shortest interval the spawner will ever wait
const MIN_INTERVAL_MS: f64 = 1.0;

/// Self-rescheduling one-shot timer.
///
/// Every firing draws a fresh interval uniformly in `[min_ms, max_ms]`, so the
/// spawn rate is irregular rather than fixed. The timer is driven by tick
/// deltas and does nothing until armed.
#[derive(Debug, Clone)]
pub struct Spawner {
    min_ms: f64,
    max_ms: f64,
    current_interval_ms: f64,
    remaining_ms: Option<f64>,
}

impl Spawner {
    pub fn new(min_ms: f64, max_ms: f64) -> Self {
        let min_ms = min_ms.max(MIN_INTERVAL_MS);
        let max_ms = max_ms.max(min_ms);
        Self {
            min_ms,
            max_ms,
            current_interval_ms: 0.0,
            remaining_ms: None,
        }
    }

    /// Start counting down towards the first firing
    pub fn arm<R: Rng>(&mut self, rng: &mut R) {
        let interval = self.draw_interval(rng);
        self.remaining_ms = Some(interval);
    }

    /// Stop rescheduling; later ticks never fire
    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Interval drawn for the pending firing
    pub fn current_interval_ms(&self) -> f64 {
        self.current_interval_ms
    }

    /// Milliseconds until the pending firing, if armed
    pub fn remaining_ms(&self) -> Option<f64> {
        self.remaining_ms
    }

    /// Advance the timer, returning how many times it fired.
    ///
    /// A tick longer than the pending interval can fire more than once; each
    /// firing re-arms with a newly drawn interval.
    pub fn tick<R: Rng>(&mut self, elapsed_ms: f64, rng: &mut R) -> usize {
        let Some(mut remaining) = self.remaining_ms else {
            return 0;
        };

        remaining -= elapsed_ms;
        let mut fired = 0;
        while remaining <= 0.0 {
            fired += 1;
            remaining += self.draw_interval(rng);
        }

        self.remaining_ms = Some(remaining);
        fired
    }

    fn draw_interval<R: Rng>(&mut self, rng: &mut R) -> f64 {
        self.current_interval_ms = rng.gen_range(self.min_ms..=self.max_ms);
        self.current_interval_ms
    }
}

/// Uniformly random point at least `margin` away from the field edges
pub fn spawn_position<R: Rng>(rng: &mut R, width: f32, height: f32, margin: f32) -> (f32, f32) {
    (
        between(rng, margin, width - margin),
        between(rng, margin, height - margin),
    )
}

fn between<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high <= low {
        low
    } else {
        rng.gen_range(low..=high)
    }
}
