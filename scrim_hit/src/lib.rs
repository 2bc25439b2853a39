// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level hit testing for overlay control widgets.
//!
//! This crate answers exactly one question: does a touch point land inside a
//! widget's hit region? A region is an axis-aligned rectangle with four
//! independently rounded corners, described by [`RoundedBox`]. It is
//! intentionally decoupled from any widget tree or event routing; callers
//! resolve a widget's on-screen bounds themselves and test points here.
//!
//! # Containment rules
//!
//! The test is two-stage, cheapest first:
//!
//! 1. Inclusive bounding-box containment via [`aabb_contains`]. Points on any
//!    edge count as inside — touch targets must not reject their own border,
//!    so this deliberately differs from [`kurbo::Rect::contains`], which is
//!    half-open.
//! 2. If all four corner radii are zero the box is an exact rectangle and
//!    stage 1 alone is authoritative. Otherwise the point must fall either in
//!    the straight-edged center region or within one of the corner arcs; a
//!    point inside a corner's radius-sized box is accepted only when its
//!    Euclidean distance to that corner's arc center is at most the radius.
//!
//! A point at distance exactly `r` from an arc center is a hit; `r + ε` is a
//! miss. A zero-size box degenerates to a single point and so misses any real
//! touch, which is how callers treat widgets whose geometry could not be
//! resolved this frame.

#![no_std]

use kurbo::{Point, Rect};

/// Corner radii for a widget hit region, one per corner, in screen units.
///
/// Radii are independent; a single rounded side or a lone rounded corner are
/// both representable. Negative radii are not meaningful and are treated as
/// zero by [`RoundedBox::contains`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    /// Radius of the top-left corner.
    pub top_left: f64,
    /// Radius of the top-right corner.
    pub top_right: f64,
    /// Radius of the bottom-right corner.
    pub bottom_right: f64,
    /// Radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl Corners {
    /// All four corners square.
    pub const ZERO: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// The same radius on all four corners.
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// True when every radius is exactly zero, i.e. the region is a plain
    /// rectangle and the bounding-box test is exact.
    pub fn is_square(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

/// Inclusive axis-aligned containment: `x0 <= x <= x1 && y0 <= y <= y1`.
///
/// This is the single containment primitive used for stage-1 hit testing and
/// for engagement boundary re-checks, so both agree on edge points.
#[inline]
pub fn aabb_contains(rect: &Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// A widget's resolved hit region: absolute bounds plus corner radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedBox {
    /// Absolute on-screen bounds.
    pub rect: Rect,
    /// Corner radii. [`Corners::ZERO`] makes the region an exact rectangle.
    pub corners: Corners,
}

impl RoundedBox {
    /// Create a region from bounds and corner radii.
    pub const fn new(rect: Rect, corners: Corners) -> Self {
        Self { rect, corners }
    }

    /// A region whose corners are all square.
    pub const fn square(rect: Rect) -> Self {
        Self {
            rect,
            corners: Corners::ZERO,
        }
    }

    /// Precise point-in-region test; see the crate docs for the exact rules.
    pub fn contains(&self, pt: Point) -> bool {
        if !aabb_contains(&self.rect, pt) {
            return false;
        }
        if self.corners.is_square() {
            // Exact rectangle; the bounding box already decided.
            return true;
        }

        let left = self.rect.x0;
        let top = self.rect.y0;
        let right = self.rect.x1;
        let bottom = self.rect.y1;

        let tl = self.corners.top_left.max(0.0);
        let tr = self.corners.top_right.max(0.0);
        let br = self.corners.bottom_right.max(0.0);
        let bl = self.corners.bottom_left.max(0.0);

        // Straight-edged center region. The horizontal insets follow the top
        // corners and the vertical insets take the larger radius per edge;
        // points left out here are picked up by the corner-box tests below.
        let center = Rect::new(
            left + tl,
            top + tl.max(tr),
            right - tr,
            bottom - bl.max(br),
        );
        if aabb_contains(&center, pt) {
            return true;
        }

        // Corner boxes, each deciding alone: once the point is inside a
        // corner's radius-sized box, the arc test for that corner is final.
        if pt.x >= left && pt.x <= left + tl && pt.y >= top && pt.y <= top + tl {
            return pt.distance(Point::new(left + tl, top + tl)) <= tl;
        }
        if pt.x >= right - tr && pt.x <= right && pt.y >= top && pt.y <= top + tr {
            return pt.distance(Point::new(right - tr, top + tr)) <= tr;
        }
        if pt.x >= right - br && pt.x <= right && pt.y >= bottom - br && pt.y <= bottom {
            return pt.distance(Point::new(right - br, bottom - br)) <= br;
        }
        if pt.x >= left && pt.x <= left + bl && pt.y >= bottom - bl && pt.y <= bottom {
            return pt.distance(Point::new(left + bl, bottom - bl)) <= bl;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_aabb_accepts_all_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(aabb_contains(&r, Point::new(0.0, 0.0)));
        assert!(aabb_contains(&r, Point::new(10.0, 10.0)));
        assert!(aabb_contains(&r, Point::new(10.0, 0.0)));
        assert!(aabb_contains(&r, Point::new(5.0, 10.0)));
        assert!(!aabb_contains(&r, Point::new(10.000001, 5.0)));
        assert!(!aabb_contains(&r, Point::new(5.0, -0.000001)));
    }

    #[test]
    fn square_region_agrees_with_aabb_everywhere() {
        let rect = Rect::new(2.0, 3.0, 22.0, 13.0);
        let region = RoundedBox::square(rect);
        // Sample a grid that straddles the boundary on every side.
        let mut x = 1.0;
        while x <= 23.0 {
            let mut y = 2.0;
            while y <= 14.0 {
                let pt = Point::new(x, y);
                assert_eq!(
                    region.contains(pt),
                    aabb_contains(&rect, pt),
                    "disagreement at ({x}, {y})"
                );
                y += 0.5;
            }
            x += 0.5;
        }
    }

    #[test]
    fn rounded_center_region_hits() {
        let region = RoundedBox::new(Rect::new(0.0, 0.0, 40.0, 20.0), Corners::uniform(5.0));
        assert!(region.contains(Point::new(20.0, 10.0)));
        // On the center rect boundary.
        assert!(region.contains(Point::new(5.0, 10.0)));
        assert!(region.contains(Point::new(35.0, 15.0)));
    }

    #[test]
    fn corner_arc_distance_exactly_r_hits() {
        let r = 10.0;
        let region = RoundedBox::new(Rect::new(0.0, 0.0, 100.0, 100.0), Corners::uniform(r));
        // Arc center of the top-left corner is (10, 10); (0, 10) is at
        // distance exactly r along the axis.
        assert!(region.contains(Point::new(0.0, r)));
        assert!(region.contains(Point::new(r, 0.0)));
        // Arc centers themselves are distance zero.
        assert!(region.contains(Point::new(r, r)));
    }

    #[test]
    fn corner_arc_distance_beyond_r_misses() {
        let r = 10.0;
        let region = RoundedBox::new(Rect::new(0.0, 0.0, 100.0, 100.0), Corners::uniform(r));
        // Inside the corner box but past the arc: sqrt(r^2 + eps^2) > r.
        assert!(!region.contains(Point::new(0.0, r - 0.001)));
        // The extreme corner point is at distance r * sqrt(2).
        assert!(!region.contains(Point::new(0.0, 0.0)));
        assert!(!region.contains(Point::new(100.0, 100.0)));
    }

    #[test]
    fn each_corner_tested_against_its_own_radius() {
        let corners = Corners {
            top_left: 8.0,
            top_right: 0.0,
            bottom_right: 4.0,
            bottom_left: 0.0,
        };
        let region = RoundedBox::new(Rect::new(0.0, 0.0, 50.0, 30.0), corners);
        // Square top-right corner point stays a hit.
        assert!(region.contains(Point::new(50.0, 0.0)));
        // Square bottom-left corner point stays a hit.
        assert!(region.contains(Point::new(0.0, 30.0)));
        // Rounded top-left extreme point is shaved off.
        assert!(!region.contains(Point::new(0.0, 0.0)));
        // Rounded bottom-right extreme point is shaved off.
        assert!(!region.contains(Point::new(50.0, 30.0)));
        // But its arc boundary still hits: arc center (46, 26), radius 4.
        assert!(region.contains(Point::new(50.0, 26.0)));
    }

    #[test]
    fn outside_bounding_box_never_hits() {
        let region = RoundedBox::new(Rect::new(0.0, 0.0, 10.0, 10.0), Corners::uniform(3.0));
        assert!(!region.contains(Point::new(-1.0, 5.0)));
        assert!(!region.contains(Point::new(5.0, 11.0)));
    }

    #[test]
    fn zero_size_region_rejects_everything() {
        let region = RoundedBox::square(Rect::ZERO);
        assert!(!region.contains(Point::new(0.1, 0.1)));
        // The degenerate point itself is still "inside" the inclusive box.
        assert!(region.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn negative_radii_behave_as_square() {
        let region = RoundedBox::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Corners {
                top_left: -5.0,
                top_right: -5.0,
                bottom_right: -5.0,
                bottom_left: -5.0,
            },
        );
        assert!(region.contains(Point::new(0.0, 0.0)));
        assert!(region.contains(Point::new(10.0, 10.0)));
    }
}
