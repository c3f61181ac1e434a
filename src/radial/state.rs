// Shared state, configuration and component types for the radial menu
use bevy::prelude::*;

use crate::constants::*;
use super::highlight::RadialHighlight;

/// Marker component for the pointing controller whose forward direction drives selection
#[derive(Component)]
pub struct WandController;

/// Fired by the host's input layer when the user commits the current selection.
/// Each queued event invokes the current item's action once; edges are never coalesced.
#[derive(Event)]
pub struct ConfirmEvent;

/// Static selection tuning, set once at startup
#[derive(Resource)]
pub struct RadialMenuConfig {
    pub select_cone_angle: f32,
    pub hysteresis_deg: f32,
    pub highlight_lerp: f32,
}

impl Default for RadialMenuConfig {
    fn default() -> Self {
        Self {
            select_cone_angle: SELECT_CONE_ANGLE,
            hysteresis_deg: HYSTERESIS_DEG,
            highlight_lerp: HIGHLIGHT_LERP,
        }
    }
}

/// Selection state resource - at most one item is current at any time
#[derive(Resource, Default)]
pub struct RadialMenuState {
    pub current: Option<Entity>,
}

/// One selectable menu entry. The entity's transform is the aim target and is
/// read fresh each tick (items may move). `weight` is engine-owned smoothed
/// state; external code reads it but never writes it.
#[derive(Component)]
pub struct RadialItem {
    pub name: String,
    pub on_select: Option<Box<dyn Fn() + Send + Sync>>,
    pub highlighter: Option<Box<dyn RadialHighlight>>,
    pub weight: f32,
}

impl RadialItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_select: None,
            highlighter: None,
            weight: 0.0,
        }
    }

    pub fn with_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_select = Some(Box::new(action));
        self
    }

    /// Pre-bind a highlighter; items without one get a default `ScaleHighlight` at setup
    #[allow(dead_code)]
    pub fn with_highlighter(mut self, highlighter: impl RadialHighlight + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }
}
