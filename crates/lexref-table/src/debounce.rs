//! Deferred filter writes as an explicit armed/fired timer.

/// Cancellable deferred-write timer over caller-supplied milliseconds.
///
/// Arming while already armed supersedes the previous deadline, which is the
/// coalescing behavior: only the last change in a burst commits. There is no
/// ambient clock; whoever drives the synchronizer supplies `now_ms`, so unit
/// tests fast-forward virtual time deterministically.
#[derive(Debug, Clone)]
pub struct FilterDebounce {
    duration_ms: u64,
    deadline_ms: Option<u64>,
}

impl FilterDebounce {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            deadline_ms: None,
        }
    }

    /// Arm (or re-arm) the timer at `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.duration_ms));
    }

    /// Drop a pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Whether the quiet period has elapsed.
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.deadline_ms.is_some_and(|deadline| now_ms >= deadline)
    }

    /// Disarm and report true when due; false otherwise leaves the timer armed.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.deadline_ms = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_quiet_period() {
        let mut timer = FilterDebounce::new(300);
        timer.arm(1_000);
        assert!(!timer.fire(1_299));
        assert!(timer.is_armed());
        assert!(timer.fire(1_300));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_supersedes_deadline() {
        let mut timer = FilterDebounce::new(300);
        timer.arm(0);
        timer.arm(200);
        assert!(!timer.fire(300));
        assert!(timer.fire(500));
    }

    #[test]
    fn cancel_discards_pending_write() {
        let mut timer = FilterDebounce::new(300);
        timer.arm(0);
        timer.cancel();
        assert!(!timer.fire(10_000));
    }
}
