//! Fixed-step scheduling
//!
//! Converts a variable elapsed-time signal into a whole number of constant
//! size ticks. Sub-tick leftovers are carried into the next call so no
//! simulated time is lost or counted twice.

/// Accumulated time within this fraction of a tick counts as a whole tick.
/// Absorbs the rounding of 1/60 so k inputs summing to k ticks give k steps.
const TICK_TOLERANCE: f64 = 1e-9;

/// Outcome of draining the accumulator once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of times the step callback ran
    pub ticks: u32,
    /// Whole ticks discarded because the catch-up cap was reached
    pub dropped: u32,
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick: f64,
    accumulator: f64,
    max_ticks_per_frame: Option<u32>,
}

impl FixedStep {
    /// Unbounded catch-up: every accumulated tick is eventually run.
    pub fn new(tick: f64) -> Self {
        Self {
            tick,
            accumulator: 0.0,
            max_ticks_per_frame: None,
        }
    }

    /// Cap the number of ticks a single call may run. Backlog beyond the cap
    /// is discarded, keeping only the sub-tick remainder.
    pub fn with_max_ticks_per_frame(mut self, max: Option<u32>) -> Self {
        self.max_ticks_per_frame = max;
        self
    }

    pub fn tick_duration(&self) -> f64 {
        self.tick
    }

    /// Unconsumed time carried into the next call
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn max_ticks_per_frame(&self) -> Option<u32> {
        self.max_ticks_per_frame
    }

    /// Add `elapsed` to the accumulator and call `step` once per whole tick
    /// held, in order. Returns how many times `step` ran.
    pub fn tick<F: FnMut()>(&mut self, elapsed: f64, step: F) -> u32 {
        self.tick_with_report(elapsed, step).ticks
    }

    /// Like [`FixedStep::tick`], also reporting ticks dropped by the cap.
    pub fn tick_with_report<F: FnMut()>(&mut self, elapsed: f64, mut step: F) -> TickReport {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let threshold = self.tick * (1.0 - TICK_TOLERANCE);
        let mut report = TickReport::default();

        while self.accumulator >= threshold {
            if self.max_ticks_per_frame.is_some_and(|max| report.ticks >= max) {
                report.dropped = self.drop_backlog(threshold);
                tracing::warn!(
                    ran = report.ticks,
                    dropped = report.dropped,
                    "simulation fell behind, dropping catch-up ticks"
                );
                break;
            }
            step();
            self.accumulator -= self.tick;
            report.ticks += 1;
        }

        report
    }

    fn drop_backlog(&mut self, threshold: f64) -> u32 {
        let mut whole = (self.accumulator / self.tick).floor();
        self.accumulator -= whole * self.tick;
        if self.accumulator >= threshold {
            self.accumulator -= self.tick;
            whole += 1.0;
        }
        // The subtraction above may leave a rounding-sized negative remainder
        self.accumulator = self.accumulator.max(0.0);
        whole as u32
    }
}
