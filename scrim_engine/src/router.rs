// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer engagement tracking and change routing.
//!
//! [`Router`] is the stateful heart of the engine. It owns two maps: which
//! widgets each active pointer is engaged with, and the pressed flag of every
//! widget that has ever been pressed. Scenes and geometry are borrowed per
//! change, so a router survives relayouts and scene edits; stale engagements
//! degrade safely because every lookup tolerates a missing widget.
//!
//! A change is routed in three steps:
//!
//! 1. Releases end every engagement of the pointer and pass through.
//! 2. Down/move changes run candidate selection at the new position. The
//!    first engagement of a pointer is unconditional; any further widget the
//!    pointer slides onto is chained only while the whole engagement set is
//!    swipe-chainable. While the pointer is still idle the host gate is
//!    consulted: a host-occupied pointer may only take swipe-chainable +
//!    penetrable widgets, and anything else abandons the change wholesale.
//!    An engaged pointer is never gated again.
//! 3. Widgets the pointer was already engaged with re-evaluate their coarse
//!    bounds: swipe-chainable widgets press while the pointer is inside and
//!    release when it leaves, without losing the engagement, so re-entry
//!    presses again.

use hashbrown::HashMap;
use smallvec::SmallVec;

use kurbo::Rect;
use scrim_hit::aabb_contains;
use scrim_layout::{ButtonFlags, CaptureMode, Scene, WidgetId};

use crate::candidates::candidates_at;
use crate::press::{press_end, press_start};
use crate::types::{Disposition, EventSink, GeometryLookup, HostGate, PointerChange, PointerId};

/// What the candidate loop decided for one hit widget.
enum Engage {
    /// Pointer has no engagements yet; this widget takes it.
    First,
    /// Pointer slid onto this widget from an all-chainable engagement set.
    Chain,
    /// Already engaged, or the engagement set refuses chaining.
    Skip,
}

/// The overlay's touch router.
///
/// One router instance serves the whole overlay; it is not thread-safe and
/// expects changes in platform delivery order.
#[derive(Debug, Default)]
pub struct Router {
    /// Widgets engaged per active pointer, in engagement order.
    engaged: HashMap<PointerId, SmallVec<[WidgetId; 2]>>,
    /// Pressed flag of every widget that has been pressed at least once.
    pressed: HashMap<WidgetId, bool>,
}

impl Router {
    /// A router with no engagements and no pressed widgets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pressed flag of a widget. Widgets never pressed report false.
    pub fn is_pressed(&self, id: WidgetId) -> bool {
        self.pressed.get(&id).copied().unwrap_or(false)
    }

    /// Widgets a pointer is currently engaged with, in engagement order.
    pub fn engagements(&self, pointer: PointerId) -> &[WidgetId] {
        self.engaged.get(&pointer).map_or(&[], |list| list.as_slice())
    }

    /// Route one pointer change.
    pub fn handle_change(
        &mut self,
        scene: &mut Scene,
        geometry: &impl GeometryLookup,
        gate: &impl HostGate,
        mode: CaptureMode,
        change: PointerChange,
        sink: &mut impl EventSink,
    ) -> Disposition {
        let PointerChange {
            pointer,
            position,
            is_pressed,
        } = change;

        if !is_pressed {
            // Release: end every engagement and forget the pointer. The raw
            // up is always the host's to see.
            if let Some(list) = self.engaged.remove(&pointer) {
                for id in list {
                    press_end(&mut self.pressed, scene, id, sink);
                }
            }
            return Disposition::PassThrough;
        }

        // Engagements as of before this change; boundary re-evaluation below
        // runs over this snapshot so widgets engaged by this very change are
        // not immediately double-pressed.
        let engaged_before: SmallVec<[WidgetId; 2]> =
            self.engaged.get(&pointer).cloned().unwrap_or_default();

        let mut consumed = false;
        for candidate in candidates_at(scene, geometry, mode, position) {
            let pass_through = candidate
                .flags
                .contains(ButtonFlags::SWIPE_CHAINABLE | ButtonFlags::PENETRABLE);
            if engaged_before.is_empty() && gate.is_occupied(pointer) && !pass_through {
                // The host owns this still-idle pointer and the widget would
                // steal it: abandon the whole change. Pointers already
                // engaged are never re-gated.
                return Disposition::PassThrough;
            }

            let action = match self.engaged.get(&pointer) {
                None => Engage::First,
                Some(list) if list.is_empty() => Engage::First,
                Some(list) if list.contains(&candidate.id) => Engage::Skip,
                Some(list) => {
                    let chainable = candidate.flags.contains(ButtonFlags::SWIPE_CHAINABLE)
                        && list.iter().all(|id| {
                            scene
                                .widget(*id)
                                .and_then(|w| w.button_data())
                                .is_some_and(|d| d.flags.contains(ButtonFlags::SWIPE_CHAINABLE))
                        });
                    if chainable { Engage::Chain } else { Engage::Skip }
                }
            };

            match action {
                Engage::First => {
                    self.engaged.entry(pointer).or_default().push(candidate.id);
                    if candidate.flags.contains(ButtonFlags::PENETRABLE) {
                        sink.mark_move_only(pointer);
                    } else {
                        consumed = true;
                    }
                    press_start(&mut self.pressed, scene, candidate.id, sink);
                }
                Engage::Chain => {
                    self.engaged.entry(pointer).or_default().push(candidate.id);
                    press_start(&mut self.pressed, scene, candidate.id, sink);
                }
                Engage::Skip => {}
            }

            if consumed {
                break;
            }
        }

        // Boundary re-evaluation for prior engagements. Only swipe-chainable
        // widgets track the pointer; the coarse bounding box decides, not the
        // rounded outline. Leaving releases the press but keeps the
        // engagement, so sliding back in presses again.
        for id in engaged_before {
            let chainable = scene
                .widget(id)
                .and_then(|w| w.button_data())
                .is_some_and(|d| d.flags.contains(ButtonFlags::SWIPE_CHAINABLE));
            if !chainable {
                continue;
            }
            let bounds = geometry.bounds_of(id).unwrap_or(Rect::ZERO);
            if aabb_contains(&bounds, position) {
                press_start(&mut self.pressed, scene, id, sink);
            } else {
                press_end(&mut self.pressed, scene, id, sink);
            }
        }

        if consumed {
            Disposition::Consumed
        } else {
            Disposition::PassThrough
        }
    }

    /// Route one input frame's changes in delivery order.
    pub fn handle_batch(
        &mut self,
        scene: &mut Scene,
        geometry: &impl GeometryLookup,
        gate: &impl HostGate,
        mode: CaptureMode,
        changes: &[PointerChange],
        sink: &mut impl EventSink,
    ) -> alloc::vec::Vec<Disposition> {
        changes
            .iter()
            .map(|change| self.handle_change(scene, geometry, gate, mode, *change, sink))
            .collect()
    }
}
