// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-sampled gesture state machine.

use bracken_frame::{Contact, ContactId, ContactPhase, FrameInput};
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::event::{EventMask, GestureEvent, SwipeDirection};
use crate::subscribe::Subscriptions;

/// Relative distance change below which two-contact motion is not a pinch.
const PINCH_NOISE_FLOOR: f64 = 0.01;

/// Angular delta (degrees) below which two-contact motion is not a rotation.
const ROTATE_NOISE_FLOOR_DEG: f64 = 0.5;

/// Gesture bookkeeping carried across ticks.
///
/// Owned exclusively by the recognizer and mutated only inside [`GestureRecognizer::tick`].
#[derive(Clone, Debug, Default)]
struct GestureState {
    dragging: bool,
    drag_start: Point,
    swipe_delta: Vec2,
    /// Contact whose press lifecycle is being tracked. Releases of other ids
    /// do not end the press.
    active_contact: Option<ContactId>,
    /// The tracked pinch/rotate pair. `Some` is two-contact mode.
    two_contact: Option<(ContactId, ContactId)>,
    /// Inter-contact distance from the previous two-contact tick. 0.0 = no prior value.
    last_pinch_distance: f64,
    /// Contact-pair angle (degrees) from the previous two-contact tick. 0.0 = no prior value.
    last_rotation_deg: f64,
    last_tap: Option<f64>,
    press_start: Option<f64>,
    long_press_fired: bool,
}

/// Frame-sampled gesture recognizer.
///
/// Feed it one [`FrameInput`] per display frame via [`Self::tick`]; it returns the
/// gestures that frame produced, in emit order, and mirrors them as a polled
/// [`EventMask`] for consumers that prefer flags over events. Listeners
/// registered through [`Self::subscribe`] are invoked at the end of each tick.
///
/// Ticks are synchronous and strictly sequential; `tick` takes `&mut self`, so
/// overlapping invocation is ruled out by the borrow checker.
///
/// ```
/// use bracken_frame::FrameInput;
/// use bracken_gesture::{EventMask, GestureEvent, GestureRecognizer};
/// use kurbo::Point;
///
/// let mut recognizer = GestureRecognizer::new();
///
/// // Press at the origin, then drag right past the horizontal dead zone.
/// recognizer.tick(&FrameInput::pointer_down(0.0, Point::ZERO));
/// let events = recognizer.tick(&FrameInput::pointer_held(0.1, Point::new(200.0, 10.0)));
///
/// assert!(events.contains(&GestureEvent::SwipeRight));
/// assert!(recognizer.swipe_right());
/// // Classifying the swipe ended the drag.
/// assert!(!recognizer.is_dragging());
/// ```
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: GestureState,
    events: SmallVec<[GestureEvent; 12]>,
    fired: EventMask,
    subscriptions: Subscriptions,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self {
            config: GestureConfig::new(),
            state: GestureState::default(),
            events: SmallVec::new(),
            fired: EventMask::empty(),
            subscriptions: Subscriptions::new(),
        }
    }
}

impl GestureRecognizer {
    /// A recognizer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recognizer with the given configuration.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Mutable access to the configuration. Takes effect from the next tick.
    pub fn config_mut(&mut self) -> &mut GestureConfig {
        &mut self.config
    }

    /// Register `callback` for the channels in `mask` (see [`Subscriptions`]).
    pub fn subscribe(&mut self, mask: EventMask, callback: impl FnMut(&GestureEvent) + 'static) {
        self.subscriptions.subscribe(mask, callback);
    }

    /// Process one frame snapshot and return the gestures it produced, in emit order.
    ///
    /// The returned slice is valid until the next call; the same batch is also
    /// delivered to subscribers before this returns.
    pub fn tick(&mut self, input: &FrameInput<'_>) -> &[GestureEvent] {
        self.events.clear();

        self.handle_pointer(input);
        self.handle_contacts(input);
        self.update_drag_and_swipe(input);
        self.check_long_press(input.now_seconds);

        // Polled flags are derived from the batch, not tracked separately.
        self.fired = EventMask::empty();
        for event in &self.events {
            self.fired |= event.mask();
        }

        self.subscriptions.notify(&self.events);
        &self.events
    }

    /// Channels that fired on the most recent tick.
    #[must_use]
    pub const fn fired(&self) -> EventMask {
        self.fired
    }

    /// `true` if a tap fired on the most recent tick.
    #[must_use]
    pub const fn tap(&self) -> bool {
        self.fired.contains(EventMask::TAP)
    }

    /// `true` if a leftward swipe classified on the most recent tick.
    #[must_use]
    pub const fn swipe_left(&self) -> bool {
        self.fired.contains(EventMask::SWIPE_LEFT)
    }

    /// `true` if a rightward swipe classified on the most recent tick.
    #[must_use]
    pub const fn swipe_right(&self) -> bool {
        self.fired.contains(EventMask::SWIPE_RIGHT)
    }

    /// `true` if an upward swipe classified on the most recent tick.
    #[must_use]
    pub const fn swipe_up(&self) -> bool {
        self.fired.contains(EventMask::SWIPE_UP)
    }

    /// `true` if a downward swipe classified on the most recent tick.
    #[must_use]
    pub const fn swipe_down(&self) -> bool {
        self.fired.contains(EventMask::SWIPE_DOWN)
    }

    /// Current drag delta. Zero whenever no drag is active.
    #[must_use]
    pub const fn swipe_delta(&self) -> Vec2 {
        self.state.swipe_delta
    }

    /// `true` while a press is being tracked as a drag.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// `true` while two contacts are being tracked as a pinch/rotate pair.
    #[must_use]
    pub const fn is_two_contact_active(&self) -> bool {
        self.state.two_contact.is_some()
    }

    fn handle_pointer(&mut self, input: &FrameInput<'_>) {
        if input.primary_down {
            self.press_begin(input.pointer_position, input.now_seconds);
        } else if input.primary_up {
            self.press_end();
        }
    }

    fn handle_contacts(&mut self, input: &FrameInput<'_>) {
        match input.contacts {
            [] => {}
            [contact] => self.handle_single_contact(*contact, input.now_seconds),
            // Two-contact mode tracks the first two contacts; extras are ignored.
            [a, b, ..] => self.handle_contact_pair(*a, *b),
        }
    }

    fn handle_single_contact(&mut self, contact: Contact, now: f64) {
        if self.state.two_contact.is_some() {
            return;
        }
        match contact.phase {
            ContactPhase::Began => {
                self.state.active_contact = Some(contact.id);
                self.press_begin(contact.position, now);
            }
            ContactPhase::Ended | ContactPhase::Canceled => {
                // Only the tracked contact ends the press.
                if self.state.active_contact == Some(contact.id) {
                    self.state.active_contact = None;
                    self.press_end();
                }
            }
            ContactPhase::Moved => {}
        }
    }

    fn handle_contact_pair(&mut self, a: Contact, b: Contact) {
        let pair = (a.id, b.id);
        if self.state.two_contact != Some(pair) {
            // Fresh pairing: baselines from another finger pair are meaningless.
            self.state.last_pinch_distance = 0.0;
            self.state.last_rotation_deg = 0.0;
            self.state.two_contact = Some(pair);
        }

        let span = b.position - a.position;

        let distance = span.hypot();
        if self.state.last_pinch_distance != 0.0 {
            let ratio = distance / self.state.last_pinch_distance;
            if (ratio - 1.0).abs() > PINCH_NOISE_FLOOR {
                self.events.push(GestureEvent::Pinch(ratio));
            }
        }
        self.state.last_pinch_distance = distance;

        let angle_deg = span.atan2().to_degrees();
        if self.state.last_rotation_deg != 0.0 {
            let delta = wrap_angle_deg(angle_deg - self.state.last_rotation_deg);
            if delta.abs() > ROTATE_NOISE_FLOOR_DEG {
                self.events.push(GestureEvent::Rotate(delta));
            }
        }
        self.state.last_rotation_deg = angle_deg;

        if a.phase.is_release() || b.phase.is_release() {
            self.state.last_pinch_distance = 0.0;
            self.state.last_rotation_deg = 0.0;
            self.state.two_contact = None;
        }
    }

    fn update_drag_and_swipe(&mut self, input: &FrameInput<'_>) {
        if self.state.two_contact.is_some() {
            return;
        }

        self.state.swipe_delta = Vec2::ZERO;

        if self.state.dragging {
            // Touch position wins over the pointer when both are present.
            if let Some(contact) = input.contacts.first() {
                self.state.swipe_delta = contact.position - self.state.drag_start;
            } else if input.primary_held {
                self.state.swipe_delta = input.pointer_position - self.state.drag_start;
            }
            self.events.push(GestureEvent::Drag(self.state.swipe_delta));
        }

        let delta = self.state.swipe_delta;
        if delta.x.abs() > self.config.dead_zone_x() || delta.y.abs() > self.config.dead_zone_y() {
            // Strictly-greater comparison: an exact tie classifies as vertical.
            let direction = if delta.x.abs() > delta.y.abs() {
                if delta.x < 0.0 {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                }
            } else if delta.y < 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            };

            self.events.push(match direction {
                SwipeDirection::Left => GestureEvent::SwipeLeft,
                SwipeDirection::Right => GestureEvent::SwipeRight,
                SwipeDirection::Up => GestureEvent::SwipeUp,
                SwipeDirection::Down => GestureEvent::SwipeDown,
            });
            self.events.push(GestureEvent::Swipe(direction));
            self.events.push(GestureEvent::SwipeRaw(delta));
            self.events
                .push(GestureEvent::SwipeNormalized(delta / delta.hypot()));

            // A classified swipe terminates the drag.
            self.reset_drag();
        }
    }

    fn press_begin(&mut self, position: Point, now: f64) {
        self.register_tap(now);
        self.state.dragging = true;
        self.state.drag_start = position;
        self.state.press_start = Some(now);
        self.state.long_press_fired = false;
    }

    fn press_end(&mut self) {
        self.state.dragging = false;
        self.events.push(GestureEvent::DragEnd);
        self.state.press_start = None;
        self.state.long_press_fired = false;
        self.reset_drag();
    }

    fn register_tap(&mut self, now: f64) {
        self.events.push(GestureEvent::Tap);
        match self.state.last_tap {
            // Inclusive window; the double-tap consumes the pending tap so a
            // third rapid press starts a fresh sequence.
            Some(last) if now - last <= self.config.double_tap_window() => {
                self.events.push(GestureEvent::DoubleTap);
                self.state.last_tap = None;
            }
            _ => self.state.last_tap = Some(now),
        }
    }

    fn check_long_press(&mut self, now: f64) {
        if self.state.long_press_fired {
            return;
        }
        if let Some(start) = self.state.press_start {
            if now - start >= self.config.long_press_threshold() {
                self.events.push(GestureEvent::LongPress);
                self.state.long_press_fired = true;
            }
        }
    }

    fn reset_drag(&mut self) {
        self.state.drag_start = Point::ZERO;
        self.state.swipe_delta = Vec2::ZERO;
        self.state.dragging = false;
    }
}

/// Wrap an angle difference (degrees) onto the signed shortest path in `[-180, 180)`.
fn wrap_angle_deg(delta: f64) -> f64 {
    let wrapped = (delta + 180.0) % 360.0;
    let wrapped = if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    };
    wrapped - 180.0
}
