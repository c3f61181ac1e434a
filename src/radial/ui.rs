// Menu status UI - debug panel showing the aimed item and smoothed weights

use bevy::prelude::*;

use super::state::{RadialItem, RadialMenuState};

/// Marker component for the menu status panel
#[derive(Component)]
pub struct MenuStatusUI;

/// Spawn the menu status panel (bottom-left corner)
pub fn spawn_menu_status_ui(mut commands: Commands) {
    commands.spawn((
        Text::new("Aiming: none"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        MenuStatusUI,
    ));
}

/// Update the panel with the aimed item and each item's weight
pub fn update_menu_status_ui(
    state: Res<RadialMenuState>,
    item_query: Query<&RadialItem>,
    mut ui_query: Query<&mut Text, With<MenuStatusUI>>,
) {
    let Ok(mut text) = ui_query.single_mut() else { return };

    let aimed = state
        .current
        .and_then(|entity| item_query.get(entity).ok())
        .map(|item| item.name.as_str())
        .unwrap_or("none");

    let mut lines = vec![format!("Aiming: {}", aimed)];
    for item in item_query.iter() {
        lines.push(format!("  {} {:.2}", item.name, item.weight));
    }
    **text = lines.join("\n");
}
