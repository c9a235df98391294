//! Cooperative scheduling helpers used to rate-limit event handlers.
//!
//! Nothing here owns a timer. The host drives time explicitly (usually once
//! per animation frame) by passing timestamps in milliseconds, which keeps
//! every helper deterministic and testable off the browser.

use std::fmt;

/// Handle for a callback registered with [`Scheduler::request_timeout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeoutId(u64);

struct Pending {
    id: TimeoutId,
    deadline: f64,
    callback: Box<dyn FnOnce()>,
}

/// Frame-driven timeout queue
#[derive(Default)]
pub struct Scheduler {
    now: f64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler whose clock starts at `now` ms
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Current clock value (last value passed to [`Scheduler::advance_to`])
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Run `callback` once the clock reaches `now + delay_ms`.
    pub fn request_timeout<F>(&mut self, delay_ms: f64, callback: F) -> TimeoutId
    where
        F: FnOnce() + 'static,
    {
        let id = TimeoutId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            deadline: self.now + delay_ms.max(0.0),
            callback: Box::new(callback),
        });
        id
    }

    /// Drop a pending callback.
    ///
    /// Returns `false`, with no other effect, if it already fired or was
    /// already cancelled.
    pub fn cancel_timeout(&mut self, id: TimeoutId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }

    pub fn is_pending(&self, id: TimeoutId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock to `now` and fire every callback that became due, in
    /// deadline order (registration order on ties). Returns how many fired.
    pub fn advance_to(&mut self, now: f64) -> usize {
        self.now = self.now.max(now);
        let clock = self.now;

        let (mut due, waiting): (Vec<Pending>, Vec<Pending>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.deadline <= clock);
        self.pending = waiting;

        due.sort_by(|a, b| a.deadline.total_cmp(&b.deadline).then(a.id.0.cmp(&b.id.0)));
        let fired = due.len();
        for pending in due {
            (pending.callback)();
        }
        if fired > 0 {
            tracing::trace!(fired, now = clock, "scheduler.fire");
        }
        fired
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Leading-edge throttle: lets one call through, then blocks for `limit_ms`.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            blocked_until: None,
        }
    }

    /// Run `f` unless a call went through less than `limit_ms` ago.
    pub fn call<F>(&mut self, now: f64, f: F) -> bool
    where
        F: FnOnce(),
    {
        if self.blocked_until.is_some_and(|until| now < until) {
            return false;
        }
        self.blocked_until = Some(now + self.limit_ms);
        f();
        true
    }
}

/// Default debounce wait in milliseconds
pub const DEFAULT_DEBOUNCE_MS: f64 = 20.0;

/// Trailing-edge debounce: only the last value of a burst is delivered,
/// `wait_ms` after the burst goes quiet.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait_ms: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debounce<T> {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Record a call, replacing any pending value and restarting the wait.
    pub fn call(&mut self, now: f64, value: T) {
        self.pending = Some((now + self.wait_ms, value));
    }

    /// Take the pending value if its wait has elapsed.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

/// Coalesces events to at most one per animation frame, keeping the latest.
#[derive(Debug, Clone)]
pub struct FrameThrottle<T> {
    latest: Option<T>,
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self { latest: None }
    }

    /// Store `event`. Returns `true` when the caller must request a frame,
    /// i.e. no frame was pending yet.
    pub fn push(&mut self, event: T) -> bool {
        let request_frame = self.latest.is_none();
        self.latest = Some(event);
        request_frame
    }

    /// Call from the frame callback; yields the most recent event.
    pub fn on_frame(&mut self) -> Option<T> {
        self.latest.take()
    }
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds from a monotonic-enough clock for driving the helpers above.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// Milliseconds since the first call, from a monotonic clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    static ORIGIN: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    ORIGIN
        .get_or_init(std::time::Instant::now)
        .elapsed()
        .as_secs_f64()
        * 1000.0
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_timeout_fires_once_due() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        let log = Rc::clone(&fired);
        scheduler.request_timeout(100.0, move || log.borrow_mut().push("a"));

        assert_eq!(scheduler.advance_to(50.0), 0);
        assert_eq!(scheduler.advance_to(100.0), 1);
        assert_eq!(*fired.borrow(), vec!["a"]);
        assert_eq!(scheduler.advance_to(500.0), 0);
    }

    #[test]
    fn test_due_callbacks_fire_in_deadline_order() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        for (delay, name) in [(30.0, "late"), (10.0, "early"), (10.0, "early-2")] {
            let log = Rc::clone(&fired);
            scheduler.request_timeout(delay, move || log.borrow_mut().push(name));
        }
        scheduler.advance_to(100.0);
        assert_eq!(*fired.borrow(), vec!["early", "early-2", "late"]);
    }

    #[test]
    fn test_cancel_timeout() {
        let fired = Rc::new(RefCell::new(0));
        let mut scheduler = Scheduler::new();
        let count = Rc::clone(&fired);
        let id = scheduler.request_timeout(10.0, move || *count.borrow_mut() += 1);

        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel_timeout(id));
        assert!(!scheduler.cancel_timeout(id), "second cancel is a no-op");
        scheduler.advance_to(100.0);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.request_timeout(0.0, || {});
        scheduler.advance_to(0.0);
        assert!(!scheduler.cancel_timeout(id));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut scheduler = Scheduler::starting_at(1000.0);
        scheduler.advance_to(10.0);
        assert_eq!(scheduler.now(), 1000.0);
    }

    #[test]
    fn test_throttle_leading_edge() {
        let mut throttle = Throttle::new(100.0);
        let mut calls = 0;
        assert!(throttle.call(0.0, || calls += 1));
        assert!(!throttle.call(50.0, || calls += 1));
        assert!(throttle.call(100.0, || calls += 1));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_debounce_delivers_last_value() {
        let mut debounce = Debounce::default();
        debounce.call(0.0, 1);
        debounce.call(10.0, 2);
        assert_eq!(debounce.poll(25.0), None, "wait restarted at 10ms");
        assert_eq!(debounce.poll(30.0), Some(2));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debounce = Debounce::new(5.0);
        debounce.call(0.0, "x");
        assert_eq!(debounce.cancel(), Some("x"));
        assert_eq!(debounce.poll(100.0), None);
    }

    #[test]
    fn test_frame_throttle_keeps_latest() {
        let mut frames = FrameThrottle::new();
        assert!(frames.push(1));
        assert!(!frames.push(2));
        assert!(!frames.push(3));
        assert_eq!(frames.on_frame(), Some(3));
        assert_eq!(frames.on_frame(), None);
        assert!(frames.push(4));
    }
}
