// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit candidate selection: which widgets a pointer position lands on, in
//! engagement priority order.
//!
//! Eligible buttons are collected topmost-first and hit-tested precisely
//! (bounds from the geometry lookup, corner radii from the widget's resolved
//! style). The stack is then cut down by the opaque-stop rule:
//!
//! - A widget *blocks* unless it is both swipe-chainable and penetrable.
//! - If nothing in the stack blocks, the whole stack is returned: every hit
//!   widget may engage and the touch may still reach the host beneath.
//! - Otherwise the stack is truncated at the topmost blocking widget
//!   (inclusive), and any swipe-chainable-and-penetrable widget remaining
//!   above it is dropped as well. Dropping those upper widgets rather than
//!   engaging them is a long-standing quirk of this routing model that
//!   downstream layouts rely on; it is preserved as-is.

use smallvec::SmallVec;

use kurbo::Point;
use scrim_hit::RoundedBox;
use scrim_layout::{ButtonFlags, CaptureMode, Scene, WidgetId};

use crate::types::GeometryLookup;

/// One hit widget, in engagement priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The widget's identity.
    pub id: WidgetId,
    /// The widget's behaviour flags.
    pub flags: ButtonFlags,
}

impl Candidate {
    /// Whether this widget stops the hit stack: anything except the
    /// swipe-chainable + penetrable combination blocks.
    pub fn is_blocking(&self) -> bool {
        !self
            .flags
            .contains(ButtonFlags::SWIPE_CHAINABLE | ButtonFlags::PENETRABLE)
    }
}

/// Widgets hit at `position`, topmost-first, after the opaque-stop rule.
pub fn candidates_at(
    scene: &Scene,
    geometry: &impl GeometryLookup,
    mode: CaptureMode,
    position: Point,
) -> SmallVec<[Candidate; 4]> {
    let mut hits: SmallVec<[Candidate; 4]> = SmallVec::new();
    for widget in scene.buttons_topmost_first(mode) {
        let Some(data) = widget.button_data() else {
            continue;
        };
        // Unresolvable geometry degrades to a zero-size box: a safe miss.
        let bounds = geometry.bounds_of(widget.id).unwrap_or(kurbo::Rect::ZERO);
        if RoundedBox::new(bounds, widget.corners).contains(position) {
            hits.push(Candidate {
                id: widget.id,
                flags: data.flags,
            });
        }
    }

    match hits.iter().position(Candidate::is_blocking) {
        // Nothing blocks: the full stack may engage.
        None => hits,
        Some(top_blocking) => {
            hits.truncate(top_blocking + 1);
            hits.retain(|c| c.is_blocking());
            hits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;
    use scrim_hit::Corners;
    use scrim_layout::{Layer, VisibilityType, Widget};

    use crate::types::BoundsMap;

    fn button(id: u64, flags: ButtonFlags) -> Widget {
        Widget::button(WidgetId(id), flags, Vec::new())
    }

    fn ids(candidates: &[Candidate]) -> Vec<u64> {
        candidates.iter().map(|c| c.id.0).collect()
    }

    const CHAIN_PEN: ButtonFlags = ButtonFlags::SWIPE_CHAINABLE.union(ButtonFlags::PENETRABLE);

    #[test]
    fn all_pass_through_stack_is_returned_whole_topmost_first() {
        // Declared back-to-front within the layer; 3 renders on top.
        let scene = Scene::new(vec![Layer::new(
            "a",
            vec![button(1, CHAIN_PEN), button(2, CHAIN_PEN), button(3, CHAIN_PEN)],
        )]);
        let mut bounds = BoundsMap::new();
        for id in 1..=3 {
            bounds.insert(WidgetId(id), Rect::new(0.0, 0.0, 10.0, 10.0));
        }
        let out = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(5.0, 5.0));
        assert_eq!(ids(&out), vec![3, 2, 1]);
    }

    #[test]
    fn truncates_at_topmost_blocking_and_drops_pass_through_above() {
        // Topmost chain+penetrable, middle plain (blocking), bottom plain.
        let scene = Scene::new(vec![Layer::new(
            "a",
            vec![
                button(1, ButtonFlags::empty()),
                button(2, ButtonFlags::empty()),
                button(3, CHAIN_PEN),
            ],
        )]);
        let mut bounds = BoundsMap::new();
        for id in 1..=3 {
            bounds.insert(WidgetId(id), Rect::new(0.0, 0.0, 10.0, 10.0));
        }
        let out = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(5.0, 5.0));
        // Only the opaque-stop widget survives: the widget above it is
        // excluded by flag combination, the one below is truncated away.
        assert_eq!(ids(&out), vec![2]);
    }

    #[test]
    fn earlier_layer_outranks_later_layer() {
        let scene = Scene::new(vec![
            Layer::new("front", vec![button(1, ButtonFlags::empty())]),
            Layer::new("back", vec![button(2, ButtonFlags::empty())]),
        ]);
        let mut bounds = BoundsMap::new();
        bounds.insert(WidgetId(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        bounds.insert(WidgetId(2), Rect::new(0.0, 0.0, 10.0, 10.0));
        let out = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(5.0, 5.0));
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn rounded_corner_rejects_points_outside_the_arc() {
        let scene = Scene::new(vec![Layer::new(
            "a",
            vec![button(1, ButtonFlags::empty()).with_corners(Corners::uniform(10.0))],
        )]);
        let mut bounds = BoundsMap::new();
        bounds.insert(WidgetId(1), Rect::new(0.0, 0.0, 40.0, 40.0));
        let miss = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(0.5, 0.5));
        assert!(miss.is_empty());
        let hit = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(20.0, 20.0));
        assert_eq!(ids(&hit), vec![1]);
    }

    #[test]
    fn missing_geometry_is_a_safe_miss() {
        let scene = Scene::new(vec![Layer::new("a", vec![button(1, ButtonFlags::empty())])]);
        let bounds = BoundsMap::new();
        let out = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(5.0, 5.0));
        assert!(out.is_empty());
    }

    #[test]
    fn capture_mode_visibility_gates_candidates() {
        let scene = Scene::new(vec![Layer::new(
            "a",
            vec![button(1, ButtonFlags::empty()).with_visibility(VisibilityType::InGame)],
        )]);
        let mut bounds = BoundsMap::new();
        bounds.insert(WidgetId(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        let in_game = candidates_at(&scene, &bounds, CaptureMode::Host, Point::new(5.0, 5.0));
        assert_eq!(ids(&in_game), vec![1]);
        let in_menu = candidates_at(&scene, &bounds, CaptureMode::Overlay, Point::new(5.0, 5.0));
        assert!(in_menu.is_empty());
    }
}
