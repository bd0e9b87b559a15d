//! Search control: cooperative cancellation and the optional time budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Node interval between wall-clock checks; must be a power of two minus one.
const CLOCK_CHECK_MASK: u64 = 1023;

/// External cancellation trigger for a running search.
///
/// Clone freely and call [`notify`](DeadlineHandle::notify) from any thread,
/// at any time after the search call has begun; the search observes the flag
/// at node entry and between deepening iterations. Once set, the flag stays
/// set until the next top-level search call re-arms it.
#[derive(Debug, Clone)]
pub struct DeadlineHandle {
    flag: Arc<AtomicBool>,
}

impl DeadlineHandle {
    /// Signal that the search's time is up.
    pub fn notify(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether the deadline has been signalled.
    pub fn is_notified(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Stop signal consulted by the search.
///
/// Two writers can trip it: an external [`DeadlineHandle`] and, when a
/// budget is configured, the control's own wall clock. Budget expiry latches
/// the flag, so after the first trip every check is a plain atomic load.
/// The recursive search is the only reader.
#[derive(Debug)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    budget: Option<Duration>,
    started: Instant,
}

impl SearchControl {
    /// Control with no internal clock; only external notification stops it.
    pub fn unbounded() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            budget: None,
            started: Instant::now(),
        }
    }

    /// Control that also trips itself once `budget` wall time has elapsed.
    pub fn with_budget(budget: Duration) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            budget: Some(budget),
            started: Instant::now(),
        }
    }

    /// Handle an external turn clock can use to cancel the search.
    pub fn deadline_handle(&self) -> DeadlineHandle {
        DeadlineHandle {
            flag: Arc::clone(&self.stopped),
        }
    }

    /// Reset the flag and restart the budget clock.
    ///
    /// Called once at the top of every search call; nothing else ever
    /// clears the flag.
    pub fn arm(&mut self) {
        self.stopped.store(false, Ordering::Release);
        self.started = Instant::now();
    }

    /// Whether the search should abandon the node it is entering.
    ///
    /// The external flag is read on every call; the wall clock only every
    /// 1024 nodes, so the worst-case budget overrun is bounded by the cost
    /// of that many node expansions.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if nodes & CLOCK_CHECK_MASK != 0 {
            return false;
        }

        self.budget_expired()
    }

    /// Whether iterative deepening should skip starting another iteration.
    ///
    /// Checked at every iteration boundary; always consults the clock.
    pub fn should_stop_iterating(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        self.budget_expired()
    }

    /// Whether the flag is currently set.
    pub fn cancelled(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    fn budget_expired(&self) -> bool {
        if let Some(budget) = self.budget
            && self.started.elapsed() >= budget
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }
        false
    }
}
