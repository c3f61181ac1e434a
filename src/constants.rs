// Selection tuning
pub const SELECT_CONE_ANGLE: f32 = 25.0;   // Max angle (deg) between wand forward and a target to enter a selection
pub const HYSTERESIS_DEG: f32 = 5.0;       // Extra margin (deg) a competitor needs to displace the current item
pub const HIGHLIGHT_LERP: f32 = 12.0;      // Per-second smoothing rate for highlight weights

// Default scale highlighter
pub const HIGHLIGHT_MIN_SCALE: f32 = 1.0;
pub const HIGHLIGHT_MAX_SCALE: f32 = 1.15;

// Demo scene layout
pub const MENU_RADIUS: f32 = 4.0;          // Distance from the wand to the menu orbs
pub const MENU_ARC_DEG: f32 = 70.0;        // Total horizontal arc the orbs span
pub const ORB_RADIUS: f32 = 0.45;
pub const ORB_BOB_AMPLITUDE: f32 = 0.08;   // Vertical bob so the engine reads moving positions
pub const ORB_BOB_SPEED: f32 = 1.2;

// Demo wand input
pub const WAND_TURN_SPEED: f32 = 1.6;            // Radians per second for arrow-key aiming
pub const WAND_MOUSE_SENSITIVITY: f32 = 0.003;   // Radians per pixel of mouse motion
pub const WAND_PITCH_LIMIT: f32 = 1.2;           // Keep the wand from flipping over
