use std::time::Duration;

/// Fixed-period timer driven by host-supplied monotonic timestamps.
///
/// The host owns the real clock; the timer only decides how many periods elapsed since the last
/// poll. Once cancelled it never fires again.
#[derive(Clone, Debug)]
pub(crate) struct IntervalTimer {
    period: Duration,
    next_due: Option<Duration>,
    cancelled: bool,
}

impl IntervalTimer {
    /// `period` must be non-zero; callers validate this through the engine config.
    pub(crate) fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            cancelled: false,
        }
    }

    /// Arm the timer so the first period ends at `now + period`.
    pub(crate) fn start(&mut self, now: Duration) {
        if self.cancelled {
            return;
        }
        self.next_due = Some(now + self.period);
    }

    pub(crate) fn is_running(&self) -> bool {
        !self.cancelled && self.next_due.is_some()
    }

    /// Number of periods that completed up to `now`, capped at `max_fires`.
    ///
    /// Periods beyond the cap are dropped rather than queued, so a host that stalls for a long
    /// time does not replay a burst of ticks when it resumes.
    pub(crate) fn poll(&mut self, now: Duration, max_fires: u32) -> u32 {
        if self.cancelled || self.period.is_zero() {
            return 0;
        }
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let elapsed = now - due;
        let extra = elapsed.as_nanos() / self.period.as_nanos();
        let total = extra.saturating_add(1);
        let fires = u32::try_from(total).unwrap_or(u32::MAX).min(max_fires);

        let skipped = u32::try_from(extra).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.period * skipped.saturating_add(1));
        fires
    }

    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
        self.next_due = None;
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
