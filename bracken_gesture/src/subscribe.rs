// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-channel listener fan-out.
//!
//! A [`Subscriptions`] registry holds zero or more independent listeners, each
//! watching a set of channels described by an [`EventMask`]. After the
//! recognizer builds a tick's event batch it feeds the batch through
//! [`Subscriptions::notify`], which invokes every listener whose mask contains
//! the event's channel.
//!
//! Within one event, the relative invocation order of distinct listeners is
//! unspecified; listeners must not rely on it.
//!
//! ```
//! use bracken_gesture::{EventMask, GestureEvent, Subscriptions};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let taps = Rc::new(Cell::new(0));
//! let mut subs = Subscriptions::new();
//! let counter = Rc::clone(&taps);
//! subs.subscribe(EventMask::TAP | EventMask::DOUBLE_TAP, move |_| {
//!     counter.set(counter.get() + 1);
//! });
//!
//! subs.notify(&[GestureEvent::Tap, GestureEvent::DragEnd, GestureEvent::DoubleTap]);
//! assert_eq!(taps.get(), 2);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::event::{EventMask, GestureEvent};

struct Listener {
    mask: EventMask,
    callback: Box<dyn FnMut(&GestureEvent)>,
}

/// Registry of gesture listeners, filtered by channel mask.
#[derive(Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
}

impl Subscriptions {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register `callback` for every channel in `mask`.
    ///
    /// A listener interested in a payload matches on the event it receives;
    /// events outside `mask` are never delivered to it.
    pub fn subscribe(&mut self, mask: EventMask, callback: impl FnMut(&GestureEvent) + 'static) {
        self.listeners.push(Listener {
            mask,
            callback: Box::new(callback),
        });
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every registered listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Deliver a tick's event batch, in batch order, to every matching listener.
    pub fn notify(&mut self, events: &[GestureEvent]) {
        for event in events {
            let channel = event.mask();
            for listener in &mut self.listeners {
                if listener.mask.intersects(channel) {
                    (listener.callback)(event);
                }
            }
        }
    }
}

impl fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriptions")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
