//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick. Logic always advances by exactly this much per frame.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Tolerance for countdown timers reaching zero after repeated f32 subtraction
/// of `DT` (six ticks of 1/60 s do not sum to exactly 0.1 s).
pub const TIME_EPSILON: f32 = 1e-4;

// --- Screen layout ---

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

/// Scale applied to every atlas region when drawn.
pub const TEX_SCALE: f32 = 1.8;

/// Top-left padding of the map texture on screen.
pub const MAP_PAD_X: f32 = 20.0;
pub const MAP_PAD_Y: f32 = 20.0;

// --- Movement ---

/// Distance (pixels) at which a creep counts as having reached a waypoint.
pub const WAYPOINT_SNAP_RADIUS: f32 = 1.0;

/// Offsets shorter than this are not normalized when aiming.
pub const MIN_AIM_DISTANCE: f32 = 1e-4;

// --- Combat ---

/// Projectile speed in pixels per second.
pub const BULLET_SPEED: f32 = 600.0;

// --- Player ---

pub const PLAYER_START_HP: i32 = 20;
pub const PLAYER_START_GOLD: i32 = 100;

/// HP lost per creep that reaches the end of the path.
pub const LEAK_HP_PENALTY: i32 = 1;

/// Index creeps head toward after spawning or being recycled (0 is the spawn point).
pub const FIRST_WAYPOINT_TARGET: usize = 1;
