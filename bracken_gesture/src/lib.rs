// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Gesture: frame-sampled gesture recognition.
//!
//! ## Overview
//!
//! This crate derives discrete gestures — tap, double-tap, long-press,
//! four-directional swipe, drag, two-contact pinch, and two-contact rotate —
//! from a polled stream of per-frame input snapshots. It owns no loop and does
//! no input acquisition: the host samples its platform input once per display
//! frame, builds a [`bracken_frame::FrameInput`], and calls
//! [`GestureRecognizer::tick`]. The tick is synchronous, allocation-light, and
//! completes before the next snapshot arrives.
//!
//! ## Outputs
//!
//! Each tick produces a batch of [`GestureEvent`] records in a fixed emit
//! order. The same batch feeds three consumption styles:
//!
//! - **Returned batch**: `tick` returns the events for the host to route, for
//!   example through [`dispatch::run`].
//! - **Subscriptions**: listeners registered with
//!   [`GestureRecognizer::subscribe`] are invoked before `tick` returns,
//!   filtered by [`EventMask`] channel.
//! - **Polled flags**: [`GestureRecognizer::fired`] and the per-channel
//!   accessors mirror the batch until the next tick, for consumers that poll
//!   instead of subscribing. The flags are derived from the batch, never
//!   tracked separately.
//!
//! ## Gesture model
//!
//! A press (primary button down, or a touch contact beginning) registers a tap
//! and starts a drag. While exactly one contact is down, the drag delta is
//! measured from the press position and classified against per-axis dead
//! zones; crossing one emits a single directional swipe and terminates the
//! drag. Holding past a threshold emits one long-press. When two contacts are
//! down, single-contact evaluation is suspended and the contact pair drives
//! pinch (distance ratio) and rotate (signed angle delta) instead.
//! Thresholds live in [`GestureConfig`] and clamp to documented minimums on
//! write.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_frame::FrameInput;
//! use bracken_gesture::{EventMask, GestureEvent, GestureRecognizer};
//! use kurbo::Point;
//!
//! let mut recognizer = GestureRecognizer::new();
//! recognizer.subscribe(EventMask::SWIPE_DIRECTIONAL, |event| {
//!     println!("swiped: {event:?}");
//! });
//!
//! recognizer.tick(&FrameInput::pointer_down(0.0, Point::ZERO));
//! let events = recognizer.tick(&FrameInput::pointer_held(0.1, Point::new(200.0, 10.0)));
//! assert!(events.contains(&GestureEvent::SwipeRight));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatch;

mod config;
mod event;
mod recognizer;
mod subscribe;

pub use config::GestureConfig;
pub use event::{EventMask, GestureEvent, SwipeDirection};
pub use recognizer::GestureRecognizer;
pub use subscribe::Subscriptions;
