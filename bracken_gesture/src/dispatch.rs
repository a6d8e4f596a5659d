// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch helper: walk a tick's event batch and honor stop outcomes.
//!
//! [`GestureRecognizer::tick`](crate::GestureRecognizer::tick) returns the
//! events of one tick in emit order. Hosts that route those events through
//! their own handler chain can use [`run`] instead of a bare loop: the handler
//! returns an [`Outcome`] per event, and [`Outcome::Stop`] aborts the rest of
//! the batch (for example when a swipe handler consumes the gesture and the
//! trailing `SwipeRaw` / `SwipeNormalized` records should not reach anyone
//! else).
//!
//! Higher-level semantics such as "consumed" live on the event payload you
//! pass to [`run`], not in [`Outcome`].
//!
//! ```
//! use bracken_gesture::dispatch::{run, Outcome};
//! use bracken_gesture::GestureEvent;
//!
//! let batch = [GestureEvent::Tap, GestureEvent::DoubleTap, GestureEvent::DragEnd];
//!
//! let mut seen = Vec::new();
//! let stopped = run(&batch, &mut seen, |event, seen| {
//!     seen.push(*event);
//!     if matches!(event, GestureEvent::DoubleTap) {
//!         Outcome::Stop
//!     } else {
//!         Outcome::Continue
//!     }
//! });
//!
//! // The double-tap handler consumed the batch; DragEnd was never visited.
//! assert_eq!(stopped, Some(&GestureEvent::DoubleTap));
//! assert_eq!(seen, vec![GestureEvent::Tap, GestureEvent::DoubleTap]);
//! ```

use crate::event::GestureEvent;

/// Handler verdict controlling whether the rest of the batch is visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep walking the batch.
    Continue,
    /// Abort the walk; later events in this batch are not delivered.
    Stop,
}

/// Run a handler over a tick's event batch and honor stop outcomes.
///
/// - `events`: a batch as returned by `GestureRecognizer::tick`, in emit order.
/// - `state`: a mutable payload carried across handler calls; you own its shape.
/// - `handler`: the per-event callback; return [`Outcome::Stop`] to abort.
///
/// Returns `None` if the whole batch was visited, or `Some(event)` with the
/// event at which a handler stopped the walk.
pub fn run<'a, S>(
    events: &'a [GestureEvent],
    state: &mut S,
    mut handler: impl FnMut(&GestureEvent, &mut S) -> Outcome,
) -> Option<&'a GestureEvent> {
    for event in events {
        match handler(event, state) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(event),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn batch() -> Vec<GestureEvent> {
        vec![
            GestureEvent::Tap,
            GestureEvent::Drag(kurbo::Vec2::new(3.0, 4.0)),
            GestureEvent::DragEnd,
        ]
    }

    #[test]
    fn continue_visits_everything() {
        let events = batch();
        let mut visited = 0;
        let stopped = run(&events, &mut visited, |_, count| {
            *count += 1;
            Outcome::Continue
        });
        assert!(stopped.is_none());
        assert_eq!(visited, events.len());
    }

    #[test]
    fn stop_aborts_and_reports_the_stop_point() {
        let events = batch();
        let mut visited: Vec<GestureEvent> = Vec::new();
        let stopped = run(&events, &mut visited, |event, seen| {
            seen.push(*event);
            if matches!(event, GestureEvent::Drag(_)) {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        assert_eq!(stopped, Some(&events[1]));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut visited = 0;
        let stopped = run(&[], &mut visited, |_, count: &mut i32| {
            *count += 1;
            Outcome::Continue
        });
        assert!(stopped.is_none());
        assert_eq!(visited, 0);
    }
}
