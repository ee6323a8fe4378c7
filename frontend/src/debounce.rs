use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs the latest call only once `wait_ms` has passed without another one.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.wait_ms, f);
        // replacing the handle cancels the previous timer
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
