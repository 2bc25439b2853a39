// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widgets: identity, kind, behaviour flags, and anchored geometry.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use scrim_hit::Corners;

use crate::event::ClickEvent;
use crate::visibility::VisibilityType;

/// Stable identity of a widget within a scene.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WidgetId(pub u64);

bitflags::bitflags! {
    /// Behaviour flags of an interactive button.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ButtonFlags: u8 {
        /// May be engaged by a pointer sliding across it without a fresh
        /// touch-down, and keeps re-evaluating its bounds while engaged.
        const SWIPE_CHAINABLE = 0b0000_0001;
        /// A hit does not stop the raw touch from also reaching the host
        /// surface beneath.
        const PENETRABLE = 0b0000_0010;
        /// Pressed state flips on press and persists across release.
        const TOGGLEABLE = 0b0000_0100;
    }
}

/// Payload of an interactive button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonData {
    /// Behaviour flags.
    pub flags: ButtonFlags,
    /// Click events fired on every press/release transition, in order.
    pub events: Vec<ClickEvent>,
}

/// The two widget kinds. Only buttons are interactive; text boxes are
/// rendered but never hit-tested for input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    /// An interactive button.
    Button(ButtonData),
    /// A passive text box.
    Text,
}

/// Which screen dimension a per-mille size is measured against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeReference {
    /// Fraction of the screen width.
    ScreenWidth,
    /// Fraction of the screen height.
    ScreenHeight,
}

/// Widget size, either absolute or relative to the screen.
///
/// Content-sized widgets have no extent here; their renderer-measured bounds
/// reach the routing engine through its geometry lookup instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    /// Absolute size in screen units.
    Fixed {
        /// Width in screen units.
        width: f64,
        /// Height in screen units.
        height: f64,
    },
    /// Per-mille of a reference screen dimension, per axis.
    Permille {
        /// Width in 1/1000ths of `w_ref`.
        width: u16,
        /// Height in 1/1000ths of `h_ref`.
        height: u16,
        /// Reference dimension for the width.
        w_ref: SizeReference,
        /// Reference dimension for the height.
        h_ref: SizeReference,
    },
}

impl Extent {
    /// Resolve to an absolute size for the given screen.
    pub fn resolve(&self, screen: Size) -> Size {
        match *self {
            Self::Fixed { width, height } => Size::new(width, height),
            Self::Permille {
                width,
                height,
                w_ref,
                h_ref,
            } => {
                let reference = |r: SizeReference| match r {
                    SizeReference::ScreenWidth => screen.width,
                    SizeReference::ScreenHeight => screen.height,
                };
                Size::new(
                    reference(w_ref) * f64::from(width) / 1000.0,
                    reference(h_ref) * f64::from(height) / 1000.0,
                )
            }
        }
    }
}

/// Per-mille screen anchor of a widget's top-left corner.
///
/// The anchor interpolates over the widget's free travel area, not the raw
/// screen: `0` pins the widget to the left/top edge, `1000` to the
/// right/bottom edge, with the widget's own size already accounted for.
/// Values above `1000` are clamped.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Anchor {
    /// Horizontal position, 0..=1000.
    pub x: u16,
    /// Vertical position, 0..=1000.
    pub y: u16,
}

impl Anchor {
    /// Anchored to the top-left corner.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create an anchor from per-mille coordinates.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    fn fraction(v: u16) -> f64 {
        f64::from(v.min(1000)) / 1000.0
    }

    /// Absolute top-left offset for a widget of `size` on `screen`.
    pub fn resolve(&self, size: Size, screen: Size) -> Point {
        Point::new(
            (screen.width - size.width) * Self::fraction(self.x),
            (screen.height - size.height) * Self::fraction(self.y),
        )
    }
}

/// A single overlay widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    /// Stable identity.
    pub id: WidgetId,
    /// Button payload or passive text.
    pub kind: WidgetKind,
    /// Per-widget visibility rule, applied on top of the owning layer's.
    pub visibility: VisibilityType,
    /// Per-mille screen anchor.
    pub anchor: Anchor,
    /// Declared size.
    pub extent: Extent,
    /// Corner radii of the resolved style, used for precise hit testing.
    pub corners: Corners,
}

impl Widget {
    /// Create a button widget with the given flags and click events.
    pub fn button(id: WidgetId, flags: ButtonFlags, events: Vec<ClickEvent>) -> Self {
        Self {
            id,
            kind: WidgetKind::Button(ButtonData { flags, events }),
            visibility: VisibilityType::Always,
            anchor: Anchor::ZERO,
            extent: Extent::Fixed {
                width: 0.0,
                height: 0.0,
            },
            corners: Corners::ZERO,
        }
    }

    /// Create a passive text widget.
    pub fn text(id: WidgetId) -> Self {
        Self {
            id,
            kind: WidgetKind::Text,
            visibility: VisibilityType::Always,
            anchor: Anchor::ZERO,
            extent: Extent::Fixed {
                width: 0.0,
                height: 0.0,
            },
            corners: Corners::ZERO,
        }
    }

    /// Set the visibility rule.
    pub fn with_visibility(mut self, visibility: VisibilityType) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the extent.
    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }

    /// Set the corner radii.
    pub fn with_corners(mut self, corners: Corners) -> Self {
        self.corners = corners;
        self
    }

    /// True for widget kinds that participate in hit testing.
    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, WidgetKind::Button(_))
    }

    /// The button payload, if this widget is a button.
    pub fn button_data(&self) -> Option<&ButtonData> {
        match &self.kind {
            WidgetKind::Button(data) => Some(data),
            WidgetKind::Text => None,
        }
    }

    /// Resolve the widget's declared geometry to absolute bounds.
    pub fn resolve_bounds(&self, screen: Size) -> Rect {
        let size = self.extent.resolve(screen);
        Rect::from_origin_size(self.anchor.resolve(size, screen), size)
    }
}
