// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input, output, and collaborator types of the routing core.
//!
//! The engine talks to the outside world through three caller-supplied
//! seams, all in-process:
//!
//! - [`GeometryLookup`]: the rendering collaborator, mapping a widget to its
//!   measured absolute bounds for the current frame. [`BoundsMap`] is the
//!   plain implementation most renderers want — fill it after layout, hand a
//!   reference to the router.
//! - [`HostGate`]: the host surface's occupancy predicate, consulted before
//!   the overlay claims a pointer the host may already be using.
//! - [`EventSink`]: the consumer callback receiving `(event, pressed)`
//!   transitions and pointer annotations.

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use scrim_layout::{ClickEvent, WidgetId};

/// Platform identifier of one touch pointer.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PointerId(pub u64);

/// One pointer change as delivered by the platform.
///
/// A batch is a slice of these, one batch per input frame; changes within a
/// batch are processed strictly in slice order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerChange {
    /// Which pointer changed.
    pub pointer: PointerId,
    /// Absolute position of the pointer.
    pub position: Point,
    /// True while the pointer is down (including moves); false on up/cancel.
    pub is_pressed: bool,
}

impl PointerChange {
    /// A down or still-down change.
    pub const fn down(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            position,
            is_pressed: true,
        }
    }

    /// An up/cancel change.
    pub const fn up(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            position,
            is_pressed: false,
        }
    }
}

/// Per-change consume decision reported back to the platform layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// The overlay claimed the raw touch; do not forward it to the host.
    Consumed,
    /// The touch is still the host's to process.
    PassThrough,
}

impl Disposition {
    /// True when the overlay claimed the touch.
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Resolved widget bounds for the current frame, supplied by the renderer.
///
/// Returning `None` means the widget's geometry is unknown this frame; the
/// engine substitutes a zero-size box, which safely fails every hit test.
pub trait GeometryLookup {
    /// Absolute bounds of `id`, if resolvable this frame.
    fn bounds_of(&self, id: WidgetId) -> Option<Rect>;
}

impl<F: Fn(WidgetId) -> Option<Rect>> GeometryLookup for F {
    fn bounds_of(&self, id: WidgetId) -> Option<Rect> {
        self(id)
    }
}

/// Renderer-fed bounds store; the usual [`GeometryLookup`] implementation.
#[derive(Clone, Debug, Default)]
pub struct BoundsMap {
    bounds: HashMap<WidgetId, Rect>,
}

impl BoundsMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a widget's measured bounds for this frame.
    pub fn insert(&mut self, id: WidgetId, bounds: Rect) {
        self.bounds.insert(id, bounds);
    }

    /// Forget a widget's bounds.
    pub fn remove(&mut self, id: WidgetId) {
        self.bounds.remove(&id);
    }

    /// Drop all recorded bounds.
    pub fn clear(&mut self) {
        self.bounds.clear();
    }
}

impl GeometryLookup for BoundsMap {
    fn bounds_of(&self, id: WidgetId) -> Option<Rect> {
        self.bounds.get(&id).copied()
    }
}

/// Host-surface pointer occupancy, consulted before the overlay claims a
/// pointer. Once a pointer is engaged, later occupancy changes do not evict
/// it.
pub trait HostGate {
    /// Whether the host surface is currently using this pointer.
    fn is_occupied(&self, pointer: PointerId) -> bool;
}

impl<F: Fn(PointerId) -> bool> HostGate for F {
    fn is_occupied(&self, pointer: PointerId) -> bool {
        self(pointer)
    }
}

/// A host that never claims pointers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostFree;

impl HostGate for HostFree {
    fn is_occupied(&self, _pointer: PointerId) -> bool {
        false
    }
}

/// Consumer callback for press/release transitions.
pub trait EventSink {
    /// One click event fired with the owning widget's pressed value.
    fn click(&mut self, event: &ClickEvent, pressed: bool);

    /// The overlay engaged a penetrable widget with this pointer without
    /// consuming the touch: the host should treat the pointer as
    /// movement-only and not synthesize taps from it.
    fn mark_move_only(&mut self, _pointer: PointerId) {}
}
