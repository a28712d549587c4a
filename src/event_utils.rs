//! Window listeners whose lifetime the caller owns.

use crate::domain::logging::LogComponent;
use crate::log_warn;
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

/// Registration flags. Storefront listeners only observe (scroll, popstate),
/// so they default to passive bubbling listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

impl ListenerOptions {
    fn to_js(self) -> AddEventListenerOptions {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(self.passive);
        opts.set_capture(self.capture);
        opts
    }
}

/// A listener on `window` plus the closure backing it. The closure lives as
/// long as this value, so [`detach`](Self::detach) must run before it is dropped.
pub struct WindowListener {
    event_name: String,
    capture: bool,
    attached: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach<E>(event: E, options: ListenerOptions, mut cb: impl FnMut(E::EventType) + 'static) -> Self
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        let event_name = event.name().into_owned();
        let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| cb(ev.unchecked_into::<E::EventType>()));

        let attached = match web_sys::window() {
            Some(window) => match window.add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &options.to_js(),
            ) {
                Ok(()) => true,
                Err(e) => {
                    log_warn!(LogComponent::Infrastructure("Events"), "Could not listen for {}: {:?}", event_name, e);
                    false
                }
            },
            None => {
                log_warn!(LogComponent::Infrastructure("Events"), "No window; {} listener not attached", event_name);
                false
            }
        };

        Self { event_name, capture: options.capture, attached, callback }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn detach(self) {
        if !self.attached {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        ) {
            log_warn!(LogComponent::Infrastructure("Events"), "Could not remove {} listener: {:?}", self.event_name, e);
        }
    }
}
