//! Fixed-period cycle driver.
//!
//! `CycleRunner` calls [`LiftSystem::run`] once per period against absolute
//! deadlines, so pacing does not drift with cycle cost. An overrun is
//! counted and logged, never retried: the next cycle recomputes everything
//! from scratch anyway.

use crate::system::LiftSystem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Per-cycle hook, called after each control cycle with the nominal period.
/// The demo binary uses it to step the simulated plant and advance the
/// operator script.
pub type CycleHook = Box<dyn FnMut(Duration)>;

/// O(1) cycle timing counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleStats {
    /// Total cycles executed.
    pub cycle_count: u64,
    /// Cycles whose body ran past the deadline.
    pub overruns: u64,
    /// Last cycle body duration.
    pub last_cycle: Duration,
    /// Maximum cycle body duration seen.
    pub max_cycle: Duration,
}

impl CycleStats {
    fn record(&mut self, elapsed: Duration, overrun: bool) {
        self.cycle_count += 1;
        self.last_cycle = elapsed;
        if elapsed > self.max_cycle {
            self.max_cycle = elapsed;
        }
        if overrun {
            self.overruns += 1;
        }
    }
}

/// Drives a [`LiftSystem`] at a fixed period until stopped.
pub struct CycleRunner {
    system: LiftSystem,
    period: Duration,
    running: Arc<AtomicBool>,
    stats: CycleStats,
    on_cycle: Option<CycleHook>,
}

impl CycleRunner {
    /// New runner around an initialized system.
    pub fn new(system: LiftSystem, period: Duration) -> Self {
        Self {
            system,
            period,
            running: Arc::new(AtomicBool::new(true)),
            stats: CycleStats::default(),
            on_cycle: None,
        }
    }

    /// Attach a per-cycle hook.
    pub fn with_hook(mut self, hook: CycleHook) -> Self {
        self.on_cycle = Some(hook);
        self
    }

    /// Shared stop flag; clear it to end [`CycleRunner::run`] after the
    /// current cycle.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Timing counters so far.
    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    /// Execute exactly one cycle body (no pacing). Used by tests and by
    /// [`CycleRunner::run`].
    pub fn step(&mut self) {
        self.system.run();
        if let Some(hook) = self.on_cycle.as_mut() {
            hook(self.period);
        }
    }

    /// Run paced cycles until the stop flag clears.
    pub fn run(&mut self) {
        info!(period_ms = self.period.as_millis() as u64, "cycle loop starting");
        let mut deadline = Instant::now() + self.period;

        while self.running.load(Ordering::SeqCst) {
            let start = Instant::now();
            self.step();
            let elapsed = start.elapsed();

            let now = Instant::now();
            let overrun = now > deadline;
            self.stats.record(elapsed, overrun);

            if overrun {
                warn!(
                    elapsed_us = elapsed.as_micros() as u64,
                    period_us = self.period.as_micros() as u64,
                    "cycle overrun"
                );
                // Re-anchor instead of sprinting to catch up.
                deadline = now + self.period;
            } else {
                std::thread::sleep(deadline - now);
                deadline += self.period;
            }
        }

        info!(
            cycles = self.stats.cycle_count,
            overruns = self.stats.overruns,
            max_cycle_us = self.stats.max_cycle.as_micros() as u64,
            "cycle loop stopped"
        );
    }
}
