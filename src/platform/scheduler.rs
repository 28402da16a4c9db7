//! Frame and interval scheduling
//!
//! The session never calls the browser directly. It asks a `Scheduler` for
//! one-shot frame callbacks and repeating intervals and keeps the returned
//! handles so both can be cancelled deterministically.

/// A pending display-frame callback (one-shot)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// A repeating interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalHandle(pub i32);

pub trait Scheduler {
    /// Request one callback on the next display frame.
    /// `None` means the platform refused and nothing is pending.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start a callback repeating every `period_ms`
    fn start_interval(&mut self, period_ms: u32) -> Option<IntervalHandle>;

    fn clear_interval(&mut self, handle: IntervalHandle);
}

#[derive(Debug, Clone)]
struct ManualInterval {
    handle: IntervalHandle,
    period_ms: f64,
    next_due_ms: f64,
}

/// Scheduler driven by hand, with a simulated clock.
///
/// Used by the headless runner and tests: time only moves on `advance`, and
/// frames only fire on `take_frame`.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now_ms: f64,
    next_id: i32,
    frame: Option<FrameHandle>,
    intervals: Vec<ManualInterval>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    /// Simulated time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Move the clock forward and return every interval firing that became
    /// due, in time order.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<IntervalHandle> {
        let target = self.now_ms + dt_ms.max(0.0);
        let mut due = Vec::new();

        loop {
            let next = self
                .intervals
                .iter_mut()
                .filter(|i| i.next_due_ms <= target)
                .min_by(|a, b| a.next_due_ms.total_cmp(&b.next_due_ms));
            match next {
                Some(interval) => {
                    due.push(interval.handle);
                    interval.next_due_ms += interval.period_ms;
                }
                None => break,
            }
        }

        self.now_ms = target;
        due
    }

    /// Fire the pending frame callback, if any. Frames are one-shot.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_some()
    }

    pub fn active_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Nothing scheduled at all
    pub fn is_idle(&self) -> bool {
        self.frame.is_none() && self.intervals.is_empty()
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let handle = FrameHandle(self.allocate());
        self.frame = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) {
            self.frame = None;
        }
    }

    fn start_interval(&mut self, period_ms: u32) -> Option<IntervalHandle> {
        if period_ms == 0 {
            return None;
        }
        let handle = IntervalHandle(self.allocate());
        let period_ms = period_ms as f64;
        self.intervals.push(ManualInterval {
            handle,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        Some(handle)
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_one_shot() {
        let mut sched = ManualScheduler::new();
        let handle = sched.request_frame().unwrap();
        assert!(sched.has_pending_frame());
        assert_eq!(sched.take_frame(), Some(handle));
        assert_eq!(sched.take_frame(), None);
    }

    #[test]
    fn test_cancel_frame() {
        let mut sched = ManualScheduler::new();
        let handle = sched.request_frame().unwrap();
        sched.cancel_frame(handle);
        assert!(sched.is_idle());
    }

    #[test]
    fn test_cancel_stale_frame_keeps_newer() {
        let mut sched = ManualScheduler::new();
        let old = sched.request_frame().unwrap();
        let new = sched.request_frame().unwrap();
        sched.cancel_frame(old);
        assert_eq!(sched.take_frame(), Some(new));
    }

    #[test]
    fn test_interval_fires_on_period() {
        let mut sched = ManualScheduler::new();
        let handle = sched.start_interval(1500).unwrap();

        assert!(sched.advance(1499.0).is_empty());
        assert_eq!(sched.advance(1.0), vec![handle]);
        assert_eq!(sched.advance(4500.0), vec![handle, handle, handle]);
        assert_eq!(sched.now_ms(), 6000.0);
    }

    #[test]
    fn test_cleared_interval_never_fires() {
        let mut sched = ManualScheduler::new();
        let handle = sched.start_interval(100).unwrap();
        sched.clear_interval(handle);
        assert!(sched.advance(10_000.0).is_empty());
        assert!(sched.is_idle());
    }

    #[test]
    fn test_interval_starts_from_current_time() {
        let mut sched = ManualScheduler::new();
        sched.advance(1000.0);
        let handle = sched.start_interval(500).unwrap();
        assert!(sched.advance(499.0).is_empty());
        assert_eq!(sched.advance(1.0), vec![handle]);
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut sched = ManualScheduler::new();
        assert_eq!(sched.start_interval(0), None);
    }
}
