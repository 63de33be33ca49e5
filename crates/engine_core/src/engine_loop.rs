// crates/engine_core/src/engine_loop.rs

use std::time::{Duration, Instant};

/// Fixed-rate tick scheduling.
///
/// One tick per due deadline: a frame that arrives late runs a single tick
/// and the schedule restarts from "now", so a slow machine simply plays
/// slower instead of bursting to catch up.
pub struct FramePacer {
    started: Instant,
    interval: Duration,
    next_deadline: Instant,
    ticks: u64,
}

impl FramePacer {
    pub fn new(tick_rate: u32, now: Instant) -> Self {
        let interval = Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64);
        Self {
            started: now,
            interval,
            next_deadline: now,
            ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the event loop should wake up next.
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.started).as_millis() as u64
    }

    /// Returns true when a tick is due at `now` and books the next deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }

        self.ticks += 1;
        self.next_deadline += self.interval;
        if self.next_deadline <= now {
            // Fell behind by more than a tick: drop the backlog.
            self.next_deadline = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_tick_is_immediate() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(60, t0);
        assert!(pacer.poll(t0));
        assert!(!pacer.poll(t0));
        assert_eq!(pacer.ticks(), 1);
        assert_eq!(pacer.next_deadline(), t0 + pacer.interval());
    }

    #[test]
    fn one_tick_per_deadline() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(50, t0); // 20 ms
        assert!(pacer.poll(t0));
        assert!(!pacer.poll(t0 + 19 * MS));
        assert!(pacer.poll(t0 + 20 * MS));
        assert!(!pacer.poll(t0 + 21 * MS));
        assert!(pacer.poll(t0 + 41 * MS));
        // Slightly late wake-ups keep the fixed cadence.
        assert_eq!(pacer.next_deadline(), t0 + 60 * MS);
    }

    #[test]
    fn no_catch_up_after_a_stall() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(50, t0);
        pacer.poll(t0);

        let late = t0 + 500 * MS;
        assert!(pacer.poll(late));
        assert!(!pacer.poll(late));
        assert_eq!(pacer.next_deadline(), late + 20 * MS);
        assert_eq!(pacer.ticks(), 2);
    }

    #[test]
    fn elapsed_is_measured_from_start() {
        let t0 = Instant::now();
        let pacer = FramePacer::new(60, t0);
        assert_eq!(pacer.elapsed_ms(t0 + 1234 * MS), 1234);
        assert_eq!(pacer.elapsed_ms(t0), 0);
    }

    #[test]
    fn zero_rate_is_clamped() {
        let pacer = FramePacer::new(0, Instant::now());
        assert_eq!(pacer.interval(), Duration::from_secs(1));
    }
}
