// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture event records and their channel masks.

use kurbo::Vec2;

/// One of the four axis-aligned swipe directions.
///
/// Orientation follows the input space of the snapshot: positive x is
/// [`Self::Right`], positive y is [`Self::Up`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Dominant movement toward negative x.
    Left,
    /// Dominant movement toward positive x.
    Right,
    /// Dominant movement toward positive y.
    Up,
    /// Dominant movement toward negative y.
    Down,
}

impl SwipeDirection {
    /// The axis unit vector for this direction.
    #[must_use]
    pub const fn unit(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
        }
    }
}

/// A discrete gesture derived from the frame stream.
///
/// One tick can emit several events; they arrive in a fixed order (pointer
/// press transitions, contact transitions, pinch/rotate, drag/swipe,
/// long-press). Every variant corresponds to one channel bit in [`EventMask`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A press began. Fires on every press-begin, including the one that
    /// completes a double-tap.
    Tap,
    /// A second press-begin landed within the double-tap window.
    DoubleTap,
    /// A press was held past the long-press threshold. At most once per press.
    LongPress,
    /// Swipe classified as leftward.
    SwipeLeft,
    /// Swipe classified as rightward.
    SwipeRight,
    /// Swipe classified as upward.
    SwipeUp,
    /// Swipe classified as downward.
    SwipeDown,
    /// The classified swipe direction; its unit vector is
    /// [`SwipeDirection::unit`].
    Swipe(SwipeDirection),
    /// The full drag delta at the moment the swipe classified.
    SwipeRaw(Vec2),
    /// The drag delta at the moment the swipe classified, scaled to unit length.
    SwipeNormalized(Vec2),
    /// Current drag delta. Fires every tick while a drag is active, from the
    /// press-begin tick onward and before any threshold is crossed.
    Drag(Vec2),
    /// The active drag ended (button or contact released).
    DragEnd,
    /// Two-contact pinch: ratio of current to previous inter-contact distance
    /// (1.0 = no change).
    Pinch(f64),
    /// Two-contact rotate: signed shortest-path angle delta in degrees.
    Rotate(f64),
}

bitflags::bitflags! {
    /// Channel bits, one per [`GestureEvent`] variant.
    ///
    /// Used both to filter subscriptions and as the recognizer's polled
    /// per-tick flag word.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventMask: u16 {
        /// [`GestureEvent::Tap`]
        const TAP              = 1 << 0;
        /// [`GestureEvent::DoubleTap`]
        const DOUBLE_TAP       = 1 << 1;
        /// [`GestureEvent::LongPress`]
        const LONG_PRESS       = 1 << 2;
        /// [`GestureEvent::SwipeLeft`]
        const SWIPE_LEFT       = 1 << 3;
        /// [`GestureEvent::SwipeRight`]
        const SWIPE_RIGHT      = 1 << 4;
        /// [`GestureEvent::SwipeUp`]
        const SWIPE_UP         = 1 << 5;
        /// [`GestureEvent::SwipeDown`]
        const SWIPE_DOWN       = 1 << 6;
        /// [`GestureEvent::Swipe`]
        const SWIPE            = 1 << 7;
        /// [`GestureEvent::SwipeRaw`]
        const SWIPE_RAW        = 1 << 8;
        /// [`GestureEvent::SwipeNormalized`]
        const SWIPE_NORMALIZED = 1 << 9;
        /// [`GestureEvent::Drag`]
        const DRAG             = 1 << 10;
        /// [`GestureEvent::DragEnd`]
        const DRAG_END         = 1 << 11;
        /// [`GestureEvent::Pinch`]
        const PINCH            = 1 << 12;
        /// [`GestureEvent::Rotate`]
        const ROTATE           = 1 << 13;

        /// The four directional swipe channels.
        const SWIPE_DIRECTIONAL = Self::SWIPE_LEFT.bits()
            | Self::SWIPE_RIGHT.bits()
            | Self::SWIPE_UP.bits()
            | Self::SWIPE_DOWN.bits();
        /// Every channel.
        const ANY = u16::MAX >> 2;
    }
}

impl GestureEvent {
    /// The channel bit this event publishes on.
    #[must_use]
    pub const fn mask(&self) -> EventMask {
        match self {
            Self::Tap => EventMask::TAP,
            Self::DoubleTap => EventMask::DOUBLE_TAP,
            Self::LongPress => EventMask::LONG_PRESS,
            Self::SwipeLeft => EventMask::SWIPE_LEFT,
            Self::SwipeRight => EventMask::SWIPE_RIGHT,
            Self::SwipeUp => EventMask::SWIPE_UP,
            Self::SwipeDown => EventMask::SWIPE_DOWN,
            Self::Swipe(_) => EventMask::SWIPE,
            Self::SwipeRaw(_) => EventMask::SWIPE_RAW,
            Self::SwipeNormalized(_) => EventMask::SWIPE_NORMALIZED,
            Self::Drag(_) => EventMask::DRAG,
            Self::DragEnd => EventMask::DRAG_END,
            Self::Pinch(_) => EventMask::PINCH,
            Self::Rotate(_) => EventMask::ROTATE,
        }
    }
}
