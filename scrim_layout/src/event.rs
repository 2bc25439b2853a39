// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click event descriptors attached to buttons.

use alloc::string::String;

/// What kind of action a [`ClickEvent`] requests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickEventKind {
    /// Inject a key press/release into the host; `key` names the keycode.
    Key,
    /// Trigger a host-application action; `key` names the action.
    HostEvent,
    /// Toggle a layer's `hidden` flag; `key` is the target layer id. Handled
    /// by the routing engine before the event reaches the consumer.
    SwitchLayer,
}

/// An opaque action descriptor owned by a button.
///
/// The routing engine emits `(event, pressed)` pairs to the consumer on every
/// press/release transition; what the action *does* is entirely the
/// consumer's business. A button may own zero or many events.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClickEvent {
    /// The action class.
    pub kind: ClickEventKind,
    /// Identifier within the class: keycode name, action name, or layer id.
    pub key: String,
}

impl ClickEvent {
    /// Create an event from a kind and identifier.
    pub fn new(kind: ClickEventKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}
