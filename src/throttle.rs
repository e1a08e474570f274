//! Event rate limiting: a per-frame gate for scroll and a trailing-edge
//! debouncer for resize.

use std::cell::RefCell;

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Admits at most one pending frame callback at a time.
///
/// Events arriving while a frame is pending are dropped, not queued.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Claim the gate. Returns `true` if the caller must schedule a frame.
    pub fn arm(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Reopen the gate once the frame callback has run.
    pub fn release(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

/// Run `f` against the shared value unless it is already borrowed.
///
/// Returns `None` when the value is busy; the caller decides whether to drop
/// or retry the work.
pub fn try_with<T, R>(cell: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
    match cell.try_borrow_mut() {
        Ok(mut value) => Some(f(&mut value)),
        Err(_) => {
            log::debug!("controller busy; event not delivered");
            None
        }
    }
}

/// Ticket handed out for each debounced call.
pub type Ticket = u64;

/// Last-call-wins bookkeeping for a trailing-edge debounce.
///
/// Every call takes a fresh ticket; when a timer expires only the newest
/// ticket may fire, and only once.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrailingEdge {
    latest: Ticket,
    fired: bool,
}

impl TrailingEdge {
    /// Record a call and return its ticket, superseding every earlier one.
    pub fn schedule(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        self.fired = false;
        self.latest
    }

    /// Claim the right to run for `ticket`. Stale or spent tickets get `false`.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket != self.latest || self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether a scheduled call is still waiting to fire.
    #[must_use]
    pub fn is_waiting(self) -> bool {
        self.latest != 0 && !self.fired
    }
}

/// Trailing-edge debounce over `gloo_timers` timeouts.
///
/// Each call replaces the pending timeout, which cancels it; the callback also
/// checks its ticket against [`TrailingEdge`], so only the last call inside the
/// window runs.
#[cfg(feature = "hydrate")]
pub struct Debouncer {
    wait_ms: u32,
    edge: std::rc::Rc<RefCell<TrailingEdge>>,
    pending: RefCell<Option<gloo_timers::callback::Timeout>>,
}

#[cfg(feature = "hydrate")]
impl Debouncer {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, edge: std::rc::Rc::default(), pending: RefCell::new(None) }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let ticket = self.edge.borrow_mut().schedule();
        let edge = std::rc::Rc::clone(&self.edge);
        let timeout = gloo_timers::callback::Timeout::new(self.wait_ms, move || {
            if edge.borrow_mut().fire(ticket) {
                f();
            }
        });
        *self.pending.borrow_mut() = Some(timeout);
    }
}
