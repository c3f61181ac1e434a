// Highlight sinks - visual feedback driven by the smoothed selection weight
use bevy::prelude::*;

use crate::constants::{HIGHLIGHT_MAX_SCALE, HIGHLIGHT_MIN_SCALE};
use super::state::RadialItem;

/// Anything that can render a selection weight in [0, 1] onto a target.
/// Purely a rendering side effect; implementations must not fail observably.
pub trait RadialHighlight: Send + Sync {
    fn apply(&self, weight: f32, transform: &mut Transform);
}

/// Default highlighter: scales the target between a min and max multiplier of
/// the base scale recorded when the highlighter was bound.
pub struct ScaleHighlight {
    pub min_scale: f32,
    pub max_scale: f32,
    base_scale: Vec3,
}

impl ScaleHighlight {
    pub fn new(base_scale: Vec3) -> Self {
        Self {
            min_scale: HIGHLIGHT_MIN_SCALE,
            max_scale: HIGHLIGHT_MAX_SCALE,
            base_scale,
        }
    }
}

impl RadialHighlight for ScaleHighlight {
    fn apply(&self, weight: f32, transform: &mut Transform) {
        let s = self.min_scale + (self.max_scale - self.min_scale) * weight.clamp(0.0, 1.0);
        transform.scale = self.base_scale * s;
    }
}

/// System: Bind the default scale highlighter to newly registered items
/// without one, capturing the entity's current scale as the base
pub fn attach_default_highlighters(
    mut item_query: Query<(&mut RadialItem, &Transform), Added<RadialItem>>,
) {
    for (mut item, transform) in item_query.iter_mut() {
        if item.highlighter.is_none() {
            item.highlighter = Some(Box::new(ScaleHighlight::new(transform.scale)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_highlight_interpolates_from_recorded_base() {
        let highlight = ScaleHighlight::new(Vec3::splat(2.0));
        let mut transform = Transform::default();

        highlight.apply(0.0, &mut transform);
        assert_eq!(transform.scale, Vec3::splat(2.0));

        highlight.apply(1.0, &mut transform);
        assert_eq!(transform.scale, Vec3::splat(2.0 * HIGHLIGHT_MAX_SCALE));

        // Out-of-range weights clamp instead of overshooting
        highlight.apply(5.0, &mut transform);
        assert_eq!(transform.scale, Vec3::splat(2.0 * HIGHLIGHT_MAX_SCALE));
        highlight.apply(-1.0, &mut transform);
        assert_eq!(transform.scale, Vec3::splat(2.0));
    }
}
