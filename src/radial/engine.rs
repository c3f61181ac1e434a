// Core selection engine: nearest-target search, hysteretic selection update
// and per-tick smoothing of highlight weights.
use bevy::prelude::*;

use super::state::{ConfirmEvent, RadialItem, RadialMenuConfig, RadialMenuState, WandController};

/// Angle in degrees ([0, 180]) between `forward` and the direction from
/// `origin` to `target`, or None when the direction is degenerate
/// (target coincident with the wand, or a zero forward vector).
pub fn aim_angle_deg(forward: Vec3, origin: Vec3, target: Vec3) -> Option<f32> {
    let dir = target - origin;
    if dir.length_squared() <= f32::EPSILON {
        return None;
    }
    let angle = forward.angle_between(dir).to_degrees();
    angle.is_finite().then_some(angle)
}

/// Hysteretic selection update.
///
/// `best` is the nearest searchable item this tick and `current_angle` the
/// current item's own angle (None when it could not be computed). Displacing
/// the current item requires a strict improvement past `cone_deg - hysteresis_deg`,
/// while exiting only requires drifting past the plain cone: leaving a
/// selection is easier than switching to a near-tied competitor.
pub fn resolve_selection<K: Copy + PartialEq>(
    current: Option<K>,
    best: Option<(K, f32)>,
    current_angle: Option<f32>,
    cone_deg: f32,
    hysteresis_deg: f32,
) -> Option<K> {
    let Some((best_key, best_angle)) = best else {
        // Nothing searchable this tick
        return None;
    };
    match current {
        None => (best_angle <= cone_deg).then_some(best_key),
        Some(cur) => {
            if best_key != cur && best_angle < cone_deg - hysteresis_deg {
                return Some(best_key);
            }
            // Fail-safe: an uncomputable current angle deselects immediately
            match current_angle {
                Some(angle) if angle <= cone_deg => Some(cur),
                _ => None,
            }
        }
    }
}

/// Exponential approach of `weight` toward `target`, bounded to [0, 1] for
/// any dt (including 0 and very large values) and any rate (negative rates
/// degrade to a no-op).
pub fn approach_weight(weight: f32, target: f32, dt: f32, rate: f32) -> f32 {
    let t = (dt * rate).clamp(0.0, 1.0);
    (weight + (target - weight) * t).clamp(0.0, 1.0)
}

/// System: Per-tick selection update and highlight weight smoothing
pub fn radial_selection_system(
    time: Res<Time>,
    config: Res<RadialMenuConfig>,
    mut state: ResMut<RadialMenuState>,
    wand_query: Query<&GlobalTransform, With<WandController>>,
    mut item_query: Query<(Entity, &mut RadialItem, &GlobalTransform, &mut Transform)>,
) {
    // Angles from wand forward to every searchable item this tick.
    // With no wand in the scene nothing is selectable; weights still decay below.
    let mut angles: Vec<(Entity, f32)> = Vec::new();
    if let Ok(wand) = wand_query.single() {
        let origin = wand.translation();
        let forward = wand.forward().as_vec3();
        for (entity, _, item_global, _) in item_query.iter() {
            if let Some(angle) = aim_angle_deg(forward, origin, item_global.translation()) {
                angles.push((entity, angle));
            }
        }
    }
    let best = angles.iter().copied().min_by(|a, b| a.1.total_cmp(&b.1));
    let current_angle = state
        .current
        .and_then(|cur| angles.iter().find(|(e, _)| *e == cur).map(|(_, a)| *a));

    let next = resolve_selection(
        state.current,
        best,
        current_angle,
        config.select_cone_angle,
        config.hysteresis_deg,
    );
    if next != state.current {
        match next {
            Some(entity) => {
                if let Ok((_, item, _, _)) = item_query.get(entity) {
                    info!("Aiming at {}", item.name);
                }
            }
            None => info!("Aim left the menu cone"),
        }
        state.current = next;
    }

    // Smooth every item's weight toward its pole and push it to the bound
    // highlighter. Items without one are skipped; highlighting is cosmetic
    // and never blocks selection.
    let dt = time.delta_secs();
    for (entity, mut item, _, mut transform) in item_query.iter_mut() {
        let target = if state.current == Some(entity) { 1.0 } else { 0.0 };
        item.weight = approach_weight(item.weight, target, dt, config.highlight_lerp);
        if let Some(highlighter) = &item.highlighter {
            highlighter.apply(item.weight, &mut transform);
        }
    }
}

/// System: Drain confirm edges and invoke the current item's action once per edge
pub fn confirm_system(
    mut confirm_events: EventReader<ConfirmEvent>,
    state: Res<RadialMenuState>,
    item_query: Query<&RadialItem>,
) {
    for _ in confirm_events.read() {
        let Some(entity) = state.current else { continue };
        let Ok(item) = item_query.get(entity) else { continue };
        if let Some(action) = &item.on_select {
            action();
        }
        info!("Confirmed {}", item.name);
    }
}
