// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layers and the scene that stacks them.

use alloc::string::String;
use alloc::vec::Vec;

use crate::visibility::{CaptureMode, VisibilityType, visible_for};
use crate::widget::{Widget, WidgetId};

/// One layer of overlay widgets.
///
/// Widgets are declared back-to-front within the layer: the last widget in
/// [`Layer::widgets`] renders on top of its predecessors and wins ties during
/// hit testing.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Identifier `SwitchLayer` click events target.
    pub id: String,
    /// Human-readable name; not used by routing.
    pub name: String,
    /// A hidden layer renders nothing and takes no input, regardless of
    /// visibility rules.
    pub hidden: bool,
    /// Capture-mode visibility of the whole layer.
    pub visibility: VisibilityType,
    /// Widgets, back-to-front.
    pub widgets: Vec<Widget>,
}

impl Layer {
    /// Create a visible, always-on layer.
    pub fn new(id: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            hidden: false,
            visibility: VisibilityType::Always,
            widgets,
        }
    }

    /// Set the layer visibility rule.
    pub fn with_visibility(mut self, visibility: VisibilityType) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the hidden flag.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether this layer's widgets may render or take input under `mode`.
    pub fn is_eligible(&self, mode: CaptureMode) -> bool {
        !self.hidden && visible_for(mode, self.visibility)
    }
}

/// The full overlay: layers declared front-to-back.
///
/// "Topmost" is the earliest layer, and within a layer the last declared
/// widget; [`Scene::buttons_topmost_first`] yields exactly that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Layers, front-to-back.
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Create a scene from front-to-back layers.
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Eligible interactive widgets in hit-test priority order.
    ///
    /// Hidden or mode-invisible layers contribute nothing; surviving widgets
    /// are additionally filtered by their own visibility rule. Text widgets
    /// never appear.
    pub fn buttons_topmost_first(
        &self,
        mode: CaptureMode,
    ) -> impl Iterator<Item = &Widget> {
        self.layers
            .iter()
            .filter(move |layer| layer.is_eligible(mode))
            .flat_map(|layer| layer.widgets.iter().rev())
            .filter(move |widget| widget.is_interactive() && visible_for(mode, widget.visibility))
    }

    /// Find a widget by id, searching every layer.
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.layers
            .iter()
            .flat_map(|layer| layer.widgets.iter())
            .find(|widget| widget.id == id)
    }

    /// Find a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Apply `switch` to the layer a `SwitchLayer` event targets, if present.
    pub fn switch_layer(&mut self, id: &str, switch: impl FnOnce(&mut Layer)) {
        if let Some(layer) = self.layers.iter_mut().find(|layer| layer.id == id) {
            switch(layer);
        }
    }
}
