// Shared tuning constants for scroll sequencing, used by both the web shell
// and the native simulator.

// Spring presets (stiffness, damping) with unit mass
pub const PROGRESS_SPRING: (f32, f32) = (80.0, 30.0); // main scroll progress
pub const ACCENT_SPRING: (f32, f32) = (120.0, 26.0); // snappier derived signals
pub const SPRING_MASS: f32 = 1.0;

// Spring integration
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0; // fixed internal step
pub const MAX_FRAME_DT_SEC: f32 = 0.064; // long frames (idle tabs) are clamped to this
pub const SPRING_REST_DELTA: f32 = 1e-4; // |target - position| considered settled
pub const SPRING_REST_SPEED: f32 = 1e-3; // |velocity| considered settled

// One-shot burst trigger
pub const BURST_RISING_THRESHOLD: f32 = 0.55;
pub const BURST_FALLING_THRESHOLD: f32 = 0.42;
pub const BURST_ACTIVE_SEC: f32 = 2.0; // effect plays this long before cooldown

// Particle burst
pub const BURST_PARTICLES: usize = 48;
pub const BURST_PARTICLES_COMPACT: usize = 24; // fewer on small viewports
pub const BURST_SPEED_MIN: f32 = 120.0; // px per second
pub const BURST_SPEED_MAX: f32 = 420.0;
pub const BURST_SIZE_MIN: f32 = 3.0; // px radius
pub const BURST_SIZE_MAX: f32 = 8.0;
pub const BURST_GRAVITY: f32 = 380.0; // px per second^2, +y is down
pub const BURST_DRAG_PER_SEC: f32 = 1.8; // exponential velocity decay

pub const BURST_PALETTE: [[u8; 3]; 4] = [
    [255, 94, 58],   // coral
    [255, 196, 0],   // amber
    [74, 144, 255],  // blue
    [126, 217, 160], // mint
];

// Viewport policy
pub const COMPACT_MAX_WIDTH_PX: f64 = 768.0; // widths below this are "compact"
