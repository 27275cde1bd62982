// DOM contract and presentation tuning for the web shell.

// Attributes read from the page markup
pub const SEQUENCE_ATTR: &str = "data-scroll-sequence"; // container, value = preset name
pub const SCENE_ATTR: &str = "data-scene"; // child bound to a scene by name
pub const CANVAS_ATTR: &str = "data-scene-canvas"; // optional burst canvas inside the container
pub const SNAP_ATTR: &str = "data-scroll-snap"; // opt into stepped scenes under reduced motion

// Attributes and events written back for page code
pub const STATE_ATTR: &str = "data-trigger-state"; // idle | active | cooldown
pub const TRIGGERED_EVENT: &str = "scrollseq:triggered"; // dispatched on the container

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Scenes at or below this opacity are hidden so they stop catching pointer events
pub const HIDDEN_OPACITY: f32 = 0.001;

// Upper bound on dt fed to the sequencer right after the loop wakes from idle
pub const WAKE_DT_SEC: f64 = 1.0 / 60.0;
