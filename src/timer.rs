use gloo_timers::callback::Timeout;

/// Something that can run a task later on the UI thread.
///
/// Dropping the returned handle cancels the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed scheduler used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod testing {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Pending {
        due_at: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    /// Virtual clock driven by hand from tests.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<Cell<u64>>,
        queue: Rc<RefCell<Vec<Pending>>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.now.get()
        }

        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        /// Moves the clock forward, running every live task that falls due.
        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    queue.retain(|p| !p.cancelled.get());
                    let idx = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due_at <= target)
                        .min_by_key(|(_, p)| p.due_at)
                        .map(|(i, _)| i);
                    idx.map(|i| queue.remove(i))
                };
                match next {
                    Some(pending) => {
                        self.now.set(pending.due_at);
                        (pending.task)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Pending {
                due_at: self.now.get() + u64::from(delay_ms),
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}
