//! [`Scheduler`] definitions.

use std::{cell::RefCell, rc::Rc, time::Duration};

use tokio::time::Instant;

/// Capability of keeping a single pending tick.
///
/// A [`Showcase`] never owns a timer: it arms and disarms an injected
/// [`Scheduler`], and whatever drives the [`Scheduler`] delivers the tick
/// back. This keeps the transition logic runnable against virtual time.
///
/// [`Showcase`]: super::Showcase
pub trait Scheduler {
    /// Arms this [`Scheduler`] to fire once after `delay`, replacing any
    /// pending tick.
    fn arm(&mut self, delay: Duration);

    /// Cancels the pending tick, if any.
    fn disarm(&mut self);
}

impl<S: Scheduler> Scheduler for Rc<RefCell<S>> {
    fn arm(&mut self, delay: Duration) {
        self.borrow_mut().arm(delay);
    }

    fn disarm(&mut self) {
        self.borrow_mut().disarm();
    }
}

/// [`Scheduler`] armed against the [`tokio`] clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct Delay {
    /// Deadline of the pending tick, if any.
    deadline: Option<Instant>,
}

impl Delay {
    /// Returns the deadline of the pending tick, if one is armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Scheduler for Delay {
    fn arm(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn disarm(&mut self) {
        self.deadline = None;
    }
}

/// Manually driven [`Scheduler`] tracking the armed delay only.
///
/// Lets a caller advance time by hand: inspect [`Manual::armed`], decide the
/// tick elapsed, and deliver it to the [`Showcase`] itself.
///
/// [`Showcase`]: super::Showcase
#[derive(Clone, Copy, Debug, Default)]
pub struct Manual {
    /// Delay the pending tick was armed with, if any.
    armed: Option<Duration>,
}

impl Manual {
    /// Returns the delay of the pending tick, if one is armed.
    #[must_use]
    pub fn armed(&self) -> Option<Duration> {
        self.armed
    }
}

impl Scheduler for Manual {
    fn arm(&mut self, delay: Duration) {
        self.armed = Some(delay);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }
}
