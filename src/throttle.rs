use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::timer::Scheduler;

/// Trailing-edge throttle.
///
/// The first call of a quiet period arms a timer; calls arriving before it
/// fires only replace the stored value. When the timer fires the handler
/// runs once with the latest value, so a burst always ends with exactly one
/// call that sees its final event. Dropping the throttle cancels a pending
/// call.
pub struct Throttle<T: 'static, S: Scheduler + 'static> {
    inner: Rc<Inner<T, S>>,
}

struct Inner<T, S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    latest: RefCell<Option<T>>,
    armed: RefCell<Option<S::Handle>>,
    handler: RefCell<Box<dyn FnMut(T)>>,
}

impl<T: 'static, S: Scheduler + 'static> Throttle<T, S> {
    pub fn new(scheduler: S, interval_ms: u32, handler: impl FnMut(T) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                interval_ms,
                latest: RefCell::new(None),
                armed: RefCell::new(None),
                handler: RefCell::new(Box::new(handler)),
            }),
        }
    }

    pub fn call(&self, value: T) {
        *self.inner.latest.borrow_mut() = Some(value);
        if self.inner.armed.borrow().is_some() {
            return;
        }

        let weak: Weak<Inner<T, S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.interval_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.flush();
                }
            }),
        );
        *self.inner.armed.borrow_mut() = Some(handle);
    }
}

impl<T, S: Scheduler> Inner<T, S> {
    fn flush(&self) {
        // Disarm before running so the handler itself may re-arm.
        drop(self.armed.borrow_mut().take());
        let value = self.latest.borrow_mut().take();
        if let Some(value) = value {
            (self.handler.borrow_mut())(value);
        }
    }
}
