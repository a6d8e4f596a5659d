// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Frame: the per-frame input snapshot consumed by the gesture recognizer.
//!
//! A host application samples its raw input once per display frame and hands the
//! recognizer a [`FrameInput`]: the mouse-equivalent pointer state, an ordered list
//! of active touch [`Contact`]s, and a monotonic clock reading. This crate is the
//! contract for that boundary — plain data, no behavior.
//!
//! ## Contact identity
//!
//! Each [`Contact`] carries a [`ContactId`] that must stay stable for as long as the
//! contact is active. Downstream gesture continuity (which finger pair a pinch is
//! measured between, which press a release ends) is keyed by id, not by position in
//! the `contacts` slice, so hosts must not recycle an id while its contact is still
//! down.
//!
//! ## Minimal example
//!
//! A frame with one touch that just landed:
//!
//! ```
//! use bracken_frame::{Contact, ContactId, ContactPhase, FrameInput};
//! use kurbo::Point;
//!
//! let contacts = [Contact::began(ContactId(7), Point::new(40.0, 80.0))];
//! let frame = FrameInput::with_contacts(0.016, &contacts);
//!
//! assert_eq!(frame.contacts.len(), 1);
//! assert_eq!(frame.contacts[0].phase, ContactPhase::Began);
//! assert!(!frame.primary_down);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;

/// Stable identity of a touch contact across frames.
///
/// The host assigns an id when a contact begins and must keep it stable until the
/// contact ends or is canceled. Ids may be reused after release.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContactId(pub u64);

/// Lifecycle phase of a touch contact within the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactPhase {
    /// The contact landed this frame.
    Began,
    /// The contact is down and may have moved since the previous frame.
    Moved,
    /// The contact lifted this frame. Its position is still reported.
    Ended,
    /// The contact was aborted by the system this frame (palm rejection,
    /// focus loss, and similar). Treated like [`ContactPhase::Ended`] by gesture logic.
    Canceled,
}

impl ContactPhase {
    /// Returns `true` for the phases that end a contact ([`Self::Ended`] and [`Self::Canceled`]).
    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Ended | Self::Canceled)
    }
}

/// One active touch point: identity, position, and lifecycle phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Stable identity of this contact (see [`ContactId`]).
    pub id: ContactId,
    /// Position in the host's input coordinate space.
    pub position: Point,
    /// Lifecycle phase for this frame.
    pub phase: ContactPhase,
}

impl Contact {
    /// A contact that landed this frame.
    #[must_use]
    pub const fn began(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: ContactPhase::Began,
        }
    }

    /// A contact that is down and tracking.
    #[must_use]
    pub const fn moved(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: ContactPhase::Moved,
        }
    }

    /// A contact that lifted this frame.
    #[must_use]
    pub const fn ended(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: ContactPhase::Ended,
        }
    }

    /// A contact that the system aborted this frame.
    #[must_use]
    pub const fn canceled(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: ContactPhase::Canceled,
        }
    }
}

/// Everything the recognizer sees for one tick.
///
/// The snapshot borrows the host's contact list for the duration of the tick; the
/// recognizer copies out whatever it needs to carry across frames. `contacts` is
/// ordered and its order is stable within the frame.
///
/// The pointer fields describe mouse-equivalent input and are independent of the
/// contact list: `primary_down` / `primary_up` are edge signals for the frame the
/// button state changed, `primary_held` is the level signal in between.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameInput<'a> {
    /// The primary button was pressed this frame.
    pub primary_down: bool,
    /// The primary button was released this frame.
    pub primary_up: bool,
    /// The primary button is currently held.
    pub primary_held: bool,
    /// Current pointer position in the host's input coordinate space.
    pub pointer_position: Point,
    /// Active touch contacts, in host order. Stable within the frame.
    pub contacts: &'a [Contact],
    /// Monotonic clock reading for this tick, in seconds.
    pub now_seconds: f64,
}

impl<'a> FrameInput<'a> {
    /// A frame with no pointer activity and no contacts.
    #[must_use]
    pub const fn idle(now_seconds: f64) -> Self {
        Self {
            primary_down: false,
            primary_up: false,
            primary_held: false,
            pointer_position: Point::ZERO,
            contacts: &[],
            now_seconds,
        }
    }

    /// A frame carrying only touch contacts.
    #[must_use]
    pub const fn with_contacts(now_seconds: f64, contacts: &'a [Contact]) -> Self {
        Self {
            primary_down: false,
            primary_up: false,
            primary_held: false,
            pointer_position: Point::ZERO,
            contacts,
            now_seconds,
        }
    }

    /// A frame on which the primary button went down at `position`.
    #[must_use]
    pub const fn pointer_down(now_seconds: f64, position: Point) -> Self {
        Self {
            primary_down: true,
            primary_up: false,
            primary_held: true,
            pointer_position: position,
            contacts: &[],
            now_seconds,
        }
    }

    /// A frame on which the primary button is held at `position`.
    #[must_use]
    pub const fn pointer_held(now_seconds: f64, position: Point) -> Self {
        Self {
            primary_down: false,
            primary_up: false,
            primary_held: true,
            pointer_position: position,
            contacts: &[],
            now_seconds,
        }
    }

    /// A frame on which the primary button was released at `position`.
    #[must_use]
    pub const fn pointer_up(now_seconds: f64, position: Point) -> Self {
        Self {
            primary_down: false,
            primary_up: true,
            primary_held: false,
            pointer_position: position,
            contacts: &[],
            now_seconds,
        }
    }
}
