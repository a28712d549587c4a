use crate::domain::logging::LogComponent;
use crate::event_utils::{ListenerOptions, WindowListener};
use crate::infrastructure::Debouncer;
use crate::{log_debug, log_warn};
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;

/// Explicit lifecycle for everything the storefront attaches to the window:
/// listeners registered through the session and timers it tracks are released
/// together by [`teardown`](Self::teardown).
#[derive(Default)]
pub struct StoreSession {
    listeners: Vec<WindowListener>,
    debouncers: Vec<Debouncer>,
    torn_down: bool,
}

impl StoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<E>(&mut self, event: E, options: ListenerOptions, cb: impl FnMut(E::EventType) + 'static)
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        if self.is_torn_down() {
            log_warn!(LogComponent::Application("Session"), "Ignoring {} listener after teardown", event.name());
            return;
        }
        let listener = WindowListener::attach(event, options, cb);
        log_debug!(LogComponent::Application("Session"), "Listening for {}", listener.event_name());
        self.listeners.push(listener);
    }

    pub fn track(&mut self, debouncer: &Debouncer) {
        self.debouncers.push(debouncer.clone());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Remove every listener and cancel pending timers. Safe to call twice.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            log_debug!(
                LogComponent::Application("Session"),
                "Tearing down {} listeners and {} timers",
                self.listener_count(),
                self.debouncers.len()
            );
        }
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        for debouncer in self.debouncers.drain(..) {
            debouncer.cancel();
        }
        self.torn_down = true;
    }
}
