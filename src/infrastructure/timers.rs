use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Single-slot timer: scheduling again cancels whatever was still pending, so
/// a burst of triggers leaves exactly one callback outstanding.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    slot: Rc<RefCell<Option<Timeout>>>,
    armed: Rc<Cell<bool>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, slot: Rc::new(RefCell::new(None)), armed: Rc::new(Cell::new(false)) }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        let armed = Rc::clone(&self.armed);
        let timeout = Timeout::new(self.delay_ms, move || {
            armed.set(false);
            callback();
        });
        self.armed.set(true);
        // A fired timeout stays in the slot until replaced; cancelling it then is a no-op.
        if let Some(previous) = self.slot.borrow_mut().replace(timeout) {
            let _ = previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.slot.borrow_mut().take() {
            let _ = previous.cancel();
        }
        self.armed.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

/// Run `callback` once after `delay_ms`. For self-removing nodes (toasts,
/// ripples) whose lifetime is bounded by the delay itself.
pub fn after(delay_ms: u32, callback: impl FnOnce() + 'static) {
    let _ = Timeout::new(delay_ms, callback).forget();
}
