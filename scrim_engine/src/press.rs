// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-widget press/release state machine.
//!
//! Pressed flags for the whole scene live in one map owned by the router;
//! these two transitions are its only mutators. Both take the scene mutably
//! because `SwitchLayer` events flip layer visibility as a side effect of the
//! press.
//!
//! The transitions are deliberately asymmetric for toggleable widgets:
//! press-start flips the flag and fires events with the new value, while
//! press-end leaves the flag alone but still fires every event with
//! `pressed = false`. A toggled-on widget therefore reports `false` on every
//! release while remaining latched on.

use hashbrown::HashMap;

use scrim_layout::{ButtonFlags, ClickEvent, ClickEventKind, Scene, WidgetId};

use crate::types::EventSink;

/// Begin (or, for toggleables, flip) a widget's press.
///
/// No-op when the widget is absent from the scene, or when a non-toggleable
/// widget is already pressed; the latter makes repeated calls while a pointer
/// rests inside a swipe-chainable widget idempotent.
pub(crate) fn press_start(
    pressed: &mut HashMap<WidgetId, bool>,
    scene: &mut Scene,
    id: WidgetId,
    sink: &mut impl EventSink,
) {
    let Some(data) = scene.widget(id).and_then(|w| w.button_data()) else {
        return;
    };
    let toggleable = data.flags.contains(ButtonFlags::TOGGLEABLE);
    let was = pressed.get(&id).copied().unwrap_or(false);
    if was && !toggleable {
        return;
    }
    let now = if toggleable { !was } else { true };
    pressed.insert(id, now);

    // Events are cloned out so SwitchLayer may mutate the scene mid-fire.
    let events: alloc::vec::Vec<ClickEvent> = data.events.clone();
    for event in &events {
        if event.kind == ClickEventKind::SwitchLayer {
            scene.switch_layer(&event.key, |layer| {
                // A toggleable button drives the layer to mirror its own
                // state; a momentary button inverts whatever is there.
                layer.hidden = if toggleable { now } else { !layer.hidden };
            });
        }
        sink.click(event, now);
    }
}

/// End a widget's press.
///
/// Non-toggleable widgets are cleared to unpressed; toggleable widgets keep
/// whatever state press-start left them in. Events always fire with
/// `pressed = false`, and `SwitchLayer` has no effect on release.
pub(crate) fn press_end(
    pressed: &mut HashMap<WidgetId, bool>,
    scene: &Scene,
    id: WidgetId,
    sink: &mut impl EventSink,
) {
    let data = scene.widget(id).and_then(|w| w.button_data());
    let toggleable = data
        .map(|d| d.flags.contains(ButtonFlags::TOGGLEABLE))
        .unwrap_or(false);
    let was = pressed.get(&id).copied().unwrap_or(false);
    if !was && !toggleable {
        return;
    }
    if !toggleable {
        pressed.insert(id, false);
    }
    let Some(data) = data else {
        return;
    };
    for event in &data.events {
        sink.click(event, false);
    }
}
