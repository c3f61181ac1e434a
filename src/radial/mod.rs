// Radial menu module - wand-aimed selection with hysteresis
//
// Submodules:
// - state: config resource, selection state, item component, confirm event
// - engine: nearest-target search, hysteretic selection update, weight smoothing
// - highlight: RadialHighlight trait and default scale highlighter
// - ui: debug panel showing the aimed item and smoothed weights

mod engine;
mod highlight;
mod state;
mod ui;

pub use highlight::{RadialHighlight, ScaleHighlight};
pub use state::{ConfirmEvent, RadialItem, RadialMenuConfig, RadialMenuState, WandController};

use bevy::prelude::*;

pub struct RadialMenuPlugin;

impl Plugin for RadialMenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RadialMenuConfig>()
            .init_resource::<RadialMenuState>()
            .add_event::<ConfirmEvent>()
            .add_systems(Startup, ui::spawn_menu_status_ui)
            .add_systems(Update, (
                // Chained: the confirm drain must observe a fully updated tick,
                // and highlighters bind before the engine first applies weights
                highlight::attach_default_highlighters,
                engine::radial_selection_system,
                engine::confirm_system,
                ui::update_menu_status_ui,
            ).chain());
    }
}
