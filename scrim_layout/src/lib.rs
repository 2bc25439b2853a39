// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrim Layout: the widget and layer model for on-screen overlay controls.
//!
//! ## Overview
//!
//! An overlay is a stack of [`Layer`]s, each holding an ordered run of
//! [`Widget`]s. Layers are declared front-to-back: the first layer — and,
//! within a layer, the *last* declared widget — is topmost for both rendering
//! and input. A widget is either an interactive button carrying behaviour
//! flags and [`ClickEvent`]s, or a passive text box that never participates
//! in input.
//!
//! This crate is pure data plus two pieces of policy:
//!
//! - the **visibility filter** ([`visible_for`], [`Layer::is_eligible`]):
//!   which widgets are eligible for rendering and hit testing under the
//!   current [`CaptureMode`];
//! - **anchored geometry** ([`Anchor`], [`Extent`]): per-mille screen
//!   placement resolved to absolute bounds with
//!   [`Widget::resolve_bounds`]. Content-sized widgets are measured by the
//!   renderer instead and fed to the routing engine through its geometry
//!   lookup.
//!
//! Input routing itself — hit candidate selection, pointer engagement, press
//! state — lives in `scrim_engine`, which consumes this model read-only
//! except for layer `hidden` flags driven by `SwitchLayer` click events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod layer;
mod visibility;
mod widget;

pub use event::{ClickEvent, ClickEventKind};
pub use layer::{Layer, Scene};
pub use visibility::{CaptureMode, VisibilityType, visible_for};
pub use widget::{Anchor, ButtonData, ButtonFlags, Extent, SizeReference, Widget, WidgetId, WidgetKind};
