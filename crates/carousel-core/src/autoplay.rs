//! Autoplay timing: the pending advance and its progress bar.

use crate::animation::Tween;
use std::time::Duration;

/// A periodic task driven by frame ticks.
///
/// At most one firing is ever pending. After firing the task rearms itself
/// for a full period; [`RepeatingTask::cancel`] disarms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTask {
    period: Duration,
    remaining: Option<Duration>,
}

impl RepeatingTask {
    /// Create a disarmed task.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            remaining: None,
        }
    }

    /// Interval between firings.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Arm for a full period, replacing any pending firing.
    pub fn arm(&mut self) {
        self.remaining = Some(self.period);
    }

    /// Disarm. Calling this with nothing pending does nothing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether a firing is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left until the pending firing.
    #[must_use]
    pub const fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance by one frame. Returns true when the task fires.
    ///
    /// Fires at most once per tick; time past the deadline is not carried
    /// into the next period.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(remaining) if dt >= remaining => {
                self.remaining = Some(self.period);
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }
}

/// Fill level of the progress bar, 0.0 to 1.0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressFill {
    tween: Option<Tween>,
}

impl ProgressFill {
    /// Start filling from empty over `duration`.
    pub fn start(&mut self, duration: Duration) {
        self.tween = Some(Tween::new(0.0, 1.0, duration));
    }

    /// Stop filling and empty the bar.
    pub fn reset(&mut self) {
        self.tween = None;
    }

    /// Current fill.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.tween.as_ref().map_or(0.0, Tween::value)
    }

    /// Advance by one frame; a full bar snaps back to empty.
    pub fn update(&mut self, dt: Duration) {
        if let Some(tween) = &mut self.tween {
            tween.update(dt);
            if tween.is_complete() {
                self.tween = None;
            }
        }
    }
}

/// Drives unattended advancement and shows the time remaining.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoplayTimer {
    task: RepeatingTask,
    progress: Option<ProgressFill>,
}

impl AutoplayTimer {
    /// Create a stopped timer; `with_progress` adds a progress bar.
    #[must_use]
    pub fn new(speed: Duration, with_progress: bool) -> Self {
        Self {
            task: RepeatingTask::new(speed),
            progress: with_progress.then(ProgressFill::default),
        }
    }

    /// Arm the pending advance and start the progress fill.
    ///
    /// Any previously pending advance is replaced, never duplicated.
    pub fn start(&mut self) {
        let speed = self.task.period();
        if let Some(progress) = &mut self.progress {
            progress.start(speed);
        }
        self.task.arm();
        log::trace!("autoplay armed for {}ms", speed.as_millis());
    }

    /// Cancel the pending advance and empty the progress bar. Idempotent.
    pub fn cancel(&mut self) {
        self.task.cancel();
        if let Some(progress) = &mut self.progress {
            progress.reset();
        }
    }

    /// Number of pending advances, never more than one.
    #[must_use]
    pub const fn pending_count(&self) -> usize {
        if self.task.is_armed() {
            1
        } else {
            0
        }
    }

    /// Time left until the next advance.
    #[must_use]
    pub const fn remaining(&self) -> Option<Duration> {
        self.task.remaining()
    }

    /// Progress bar fill, `None` without a progress bar.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.progress.as_ref().map(ProgressFill::value)
    }

    /// Advance by one frame. Returns true when the pending advance is due.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(progress) = &mut self.progress {
            progress.update(dt);
        }
        self.task.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    // =========================================================================
    // RepeatingTask
    // =========================================================================

    #[test]
    fn test_task_starts_disarmed() {
        let mut task = RepeatingTask::new(ms(500));
        assert!(!task.is_armed());
        assert!(!task.tick(ms(10_000)));
    }

    #[test]
    fn test_task_fires_at_period_and_rearms() {
        let mut task = RepeatingTask::new(ms(500));
        task.arm();
        assert!(!task.tick(ms(499)));
        assert!(task.tick(ms(1)));
        assert_eq!(task.remaining(), Some(ms(500)));
    }

    #[test]
    fn test_task_fires_once_for_a_long_frame() {
        let mut task = RepeatingTask::new(ms(100));
        task.arm();
        assert!(task.tick(ms(350)));
        assert_eq!(task.remaining(), Some(ms(100)));
    }

    #[test]
    fn test_task_rearm_restarts_full_period() {
        let mut task = RepeatingTask::new(ms(500));
        task.arm();
        task.tick(ms(300));
        task.arm();
        assert_eq!(task.remaining(), Some(ms(500)));
    }

    // =========================================================================
    // ProgressFill
    // =========================================================================

    #[test]
    fn test_progress_fills_then_resets() {
        let mut fill = ProgressFill::default();
        fill.start(ms(1000));
        assert_eq!(fill.value(), 0.0);
        fill.update(ms(500));
        assert!((fill.value() - 0.5).abs() < 0.001);
        fill.update(ms(500));
        assert_eq!(fill, ProgressFill::default());
    }

    // =========================================================================
    // AutoplayTimer
    // =========================================================================

    #[test]
    fn test_timer_start_arms_single_advance() {
        let mut timer = AutoplayTimer::new(ms(500), true);
        timer.start();
        timer.start();
        assert_eq!(timer.pending_count(), 1);
        assert_eq!(timer.remaining(), Some(ms(500)));
    }

    #[test]
    fn test_timer_cancel_is_idempotent() {
        let mut timer = AutoplayTimer::new(ms(500), true);
        timer.start();
        timer.tick(ms(200));
        timer.cancel();
        let once = timer.clone();
        timer.cancel();
        assert_eq!(timer, once);
        assert_eq!(timer.pending_count(), 0);
        assert_eq!(timer.progress(), Some(0.0));
    }

    #[test]
    fn test_timer_cancel_without_start_is_noop() {
        let mut timer = AutoplayTimer::new(ms(500), false);
        let before = timer.clone();
        timer.cancel();
        assert_eq!(timer, before);
    }

    #[test]
    fn test_timer_without_progress_bar() {
        let mut timer = AutoplayTimer::new(ms(500), false);
        timer.start();
        assert_eq!(timer.progress(), None);
    }

    #[test]
    fn test_timer_progress_tracks_remaining_time() {
        let mut timer = AutoplayTimer::new(ms(1000), true);
        timer.start();
        timer.tick(ms(250));
        let quarter = timer.progress().unwrap();
        timer.tick(ms(500));
        let three_quarters = timer.progress().unwrap();
        assert!(quarter > 0.0 && quarter < three_quarters && three_quarters < 1.0);
    }

    #[test]
    fn test_timer_fires_after_speed() {
        let mut timer = AutoplayTimer::new(ms(500), true);
        timer.start();
        assert!(!timer.tick(ms(499)));
        assert!(timer.tick(ms(1)));
        assert_eq!(timer.progress(), Some(0.0));
    }
}
