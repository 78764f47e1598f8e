use std::time::Duration;

/// A recurring trigger: fires once after `initial_delay`, then every `period`.
///
/// The owner drives the clock with [Scheduler::advance] and performs the
/// invocations it reports, so nothing runs behind the owner's back.
pub trait Scheduler {
    fn start(&mut self, initial_delay: Duration, period: Duration);

    /// Cancels any pending invocation
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Moves the clock forward and returns how many invocations fell due
    fn advance(&mut self, elapsed: Duration) -> u32;
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    until_next: Duration,
    period: Duration,
}

/// Single-threaded scheduler ticked by the host's frame clock
#[derive(Debug, Default)]
pub struct TickScheduler {
    timer: Option<Timer>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TickScheduler {
    fn start(&mut self, initial_delay: Duration, period: Duration) {
        self.timer = Some(Timer {
            until_next: initial_delay,
            period,
        });
    }

    fn stop(&mut self) {
        self.timer = None;
    }

    fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        let Some(timer) = &mut self.timer else {
            return 0;
        };

        let mut remaining = elapsed;
        let mut fired = 0;

        while remaining >= timer.until_next {
            remaining -= timer.until_next;
            timer.until_next = timer.period;
            fired += 1;

            // a zero period fires at most once per tick
            if timer.period.is_zero() {
                break;
            }
        }

        timer.until_next = timer.until_next.saturating_sub(remaining);

        fired
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn idle_scheduler_never_fires() {
        let mut scheduler = TickScheduler::new();

        assert!(!scheduler.is_running());
        assert_eq!(scheduler.advance(ms(10_000)), 0);
    }

    #[test]
    fn waits_for_initial_delay_then_period() {
        let mut scheduler = TickScheduler::new();
        scheduler.start(ms(1000), ms(500));

        assert_eq!(scheduler.advance(ms(900)), 0);
        assert_eq!(scheduler.advance(ms(100)), 1);
        assert_eq!(scheduler.advance(ms(499)), 0);
        assert_eq!(scheduler.advance(ms(1)), 1);
        assert_eq!(scheduler.advance(ms(1000)), 2);
    }

    #[test]
    fn zero_delay_fires_on_first_tick() {
        let mut scheduler = TickScheduler::new();
        scheduler.start(Duration::ZERO, ms(1000));

        assert_eq!(scheduler.advance(Duration::ZERO), 1);
        assert_eq!(scheduler.advance(ms(999)), 0);
        assert_eq!(scheduler.advance(ms(1)), 1);
    }

    #[test]
    fn long_tick_catches_up() {
        let mut scheduler = TickScheduler::new();
        scheduler.start(ms(100), ms(100));

        assert_eq!(scheduler.advance(ms(450)), 4);
        assert_eq!(scheduler.advance(ms(50)), 1);
    }

    #[test]
    fn zero_period_fires_once_per_tick() {
        let mut scheduler = TickScheduler::new();
        scheduler.start(Duration::ZERO, Duration::ZERO);

        assert_eq!(scheduler.advance(ms(16)), 1);
        assert_eq!(scheduler.advance(ms(16)), 1);
    }

    #[test]
    fn stop_cancels_pending_invocation() {
        let mut scheduler = TickScheduler::new();
        scheduler.start(ms(100), ms(100));
        assert_eq!(scheduler.advance(ms(50)), 0);

        scheduler.stop();

        assert!(!scheduler.is_running());
        assert_eq!(scheduler.advance(ms(1000)), 0);
    }
}
