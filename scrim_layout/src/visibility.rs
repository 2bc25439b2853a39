// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture-mode visibility rules.
//!
//! Overlay widgets can be scoped to the host surface having pointer focus
//! (`InGame`), the overlay itself having it (`InMenu`), or neither
//! (`Always`). The filter decides eligibility for this frame only; it holds
//! no state.

/// Who currently owns pointer focus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaptureMode {
    /// The host surface has captured the pointer (e.g. the game has grabbed
    /// the cursor).
    Host,
    /// The overlay is in focus; the host has released the pointer.
    Overlay,
}

/// When a layer or widget is shown and hit-testable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisibilityType {
    /// Visible in both capture modes.
    #[default]
    Always,
    /// Visible only while the host surface holds the pointer.
    InGame,
    /// Visible only while the host surface has released the pointer.
    InMenu,
}

/// Whether a `visibility` rule is satisfied under `mode`.
///
/// A hidden layer overrides this per-widget check; see
/// [`Layer::is_eligible`](crate::Layer::is_eligible).
pub fn visible_for(mode: CaptureMode, visibility: VisibilityType) -> bool {
    match visibility {
        VisibilityType::Always => true,
        VisibilityType::InGame => mode == CaptureMode::Host,
        VisibilityType::InMenu => mode == CaptureMode::Overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_is_visible_in_both_modes() {
        assert!(visible_for(CaptureMode::Host, VisibilityType::Always));
        assert!(visible_for(CaptureMode::Overlay, VisibilityType::Always));
    }

    #[test]
    fn in_game_requires_host_capture() {
        assert!(visible_for(CaptureMode::Host, VisibilityType::InGame));
        assert!(!visible_for(CaptureMode::Overlay, VisibilityType::InGame));
    }

    #[test]
    fn in_menu_requires_overlay_capture() {
        assert!(!visible_for(CaptureMode::Host, VisibilityType::InMenu));
        assert!(visible_for(CaptureMode::Overlay, VisibilityType::InMenu));
    }
}
