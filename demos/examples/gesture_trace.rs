// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted frame sequence through the gesture recognizer.
//!
//! This example replays a touch session — tap, double-tap, a drag that turns
//! into a swipe, a long hold, and a two-finger pinch/rotate — one frame at a
//! time, and shows all three output styles:
//! - the event batch returned by `tick`,
//! - a channel subscription,
//! - the polled per-tick flags.
//!
//! Run:
//! - `cargo run -p bracken_demos --example gesture_trace`

use bracken_frame::{Contact, ContactId, FrameInput};
use bracken_gesture::dispatch::{self, Outcome};
use bracken_gesture::{EventMask, GestureRecognizer};
use kurbo::Point;

const FINGER_A: ContactId = ContactId(1);
const FINGER_B: ContactId = ContactId(2);

fn main() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.subscribe(EventMask::DOUBLE_TAP | EventMask::LONG_PRESS, |event| {
        println!("    [subscriber] {event:?}");
    });

    // Each step is a label plus the contacts for that frame; frames advance at 60 Hz.
    let script: Vec<(&str, Vec<Contact>)> = vec![
        ("tap down", vec![Contact::began(FINGER_A, Point::new(50.0, 50.0))]),
        ("tap up", vec![Contact::ended(FINGER_A, Point::new(50.0, 50.0))]),
        ("second tap down", vec![Contact::began(FINGER_A, Point::new(50.0, 50.0))]),
        ("second tap up", vec![Contact::ended(FINGER_A, Point::new(50.0, 50.0))]),
        ("press for drag", vec![Contact::began(FINGER_A, Point::new(100.0, 100.0))]),
        ("drag a little", vec![Contact::moved(FINGER_A, Point::new(160.0, 104.0))]),
        ("drag past the dead zone", vec![Contact::moved(FINGER_A, Point::new(260.0, 110.0))]),
        ("release", vec![Contact::ended(FINGER_A, Point::new(260.0, 110.0))]),
        ("second finger lands", vec![
            Contact::began(FINGER_A, Point::new(100.0, 100.0)),
            Contact::began(FINGER_B, Point::new(200.0, 100.0)),
        ]),
        ("spread and twist", vec![
            Contact::moved(FINGER_A, Point::new(90.0, 95.0)),
            Contact::moved(FINGER_B, Point::new(215.0, 115.0)),
        ]),
        ("fingers lift", vec![
            Contact::ended(FINGER_A, Point::new(90.0, 95.0)),
            Contact::ended(FINGER_B, Point::new(215.0, 115.0)),
        ]),
        ("hold down", vec![Contact::began(FINGER_A, Point::new(50.0, 50.0))]),
    ];

    let mut now = 0.0;
    for (label, contacts) in &script {
        let events = recognizer.tick(&FrameInput::with_contacts(now, contacts)).to_vec();
        print_tick(label, now, &events, &recognizer);
        now += 1.0 / 60.0;
    }

    // Keep holding until the long-press lands.
    let held = [Contact::moved(FINGER_A, Point::new(50.0, 50.0))];
    while !recognizer.fired().contains(EventMask::LONG_PRESS) {
        let events = recognizer.tick(&FrameInput::with_contacts(now, &held)).to_vec();
        if !events.is_empty() {
            print_tick("still holding", now, &events, &recognizer);
        }
        now += 1.0 / 60.0;
    }
}

fn print_tick(label: &str, now: f64, events: &[bracken_gesture::GestureEvent], recognizer: &GestureRecognizer) {
    if events.is_empty() {
        println!("{now:>6.3}s  {label}: (no events)");
        return;
    }
    println!("{now:>6.3}s  {label}:");
    let _ = dispatch::run(events, &mut (), |event, _| {
        println!("    {event:?}");
        Outcome::Continue
    });
    if recognizer.fired().intersects(EventMask::SWIPE_DIRECTIONAL) {
        println!("    polled: fired={:?}", recognizer.fired());
    }
}
