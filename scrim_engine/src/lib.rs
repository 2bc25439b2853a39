// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrim Engine: the touch routing core for on-screen overlay controls.
//!
//! ## Overview
//!
//! A Scrim overlay floats above a host surface (typically a game view) and
//! turns raw touches into click events, while deciding per touch whether the
//! host beneath should still see it. This crate owns that decision. It takes
//! a `scrim_layout` [`Scene`](scrim_layout::Scene), per-frame widget bounds
//! from the renderer, and a stream of [`PointerChange`]s, and drives the
//! press state of every widget.
//!
//! ## Routing model
//!
//! For each down or move change, [`candidates_at`] collects the widgets hit
//! at the pointer position, topmost first, and applies the opaque-stop rule:
//! only a widget that is both swipe-chainable and penetrable lets the touch
//! continue past it. The [`Router`] then engages candidates with the
//! pointer:
//!
//! - the pointer's first widget engages unconditionally; further widgets are
//!   *chained* only while every engaged widget is swipe-chainable;
//! - engaging a non-penetrable widget consumes the raw touch
//!   ([`Disposition::Consumed`]); penetrable engagements let it pass through
//!   and ask the sink to treat the pointer as movement-only;
//! - a [`HostGate`] can refuse the overlay a pointer the host is already
//!   using, except for widgets that are swipe-chainable and penetrable;
//! - engaged swipe-chainable widgets re-check their bounds on every change,
//!   releasing on exit and pressing again on re-entry;
//! - a release ends every engagement of the pointer.
//!
//! Press transitions fire the widget's [`ClickEvent`](scrim_layout::ClickEvent)s
//! through an [`EventSink`]. Toggleable widgets latch: their pressed flag
//! flips on each press and survives release, and a `SwitchLayer` event from a
//! toggleable drives the target layer to mirror the flag.
//!
//! ## Collaborators
//!
//! The engine has no platform dependencies. Geometry arrives through
//! [`GeometryLookup`] (usually a renderer-filled [`BoundsMap`]), host
//! occupancy through [`HostGate`], and outputs leave through [`EventSink`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod candidates;
mod press;
mod router;
mod types;

pub use candidates::{Candidate, candidates_at};
pub use router::Router;
pub use types::{
    BoundsMap, Disposition, EventSink, GeometryLookup, HostFree, HostGate, PointerChange,
    PointerId,
};
