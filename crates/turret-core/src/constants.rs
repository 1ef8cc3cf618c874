//! Station constants and tuning parameters.

// --- Orientation ---

/// Pan travel limits (degrees).
pub const PAN_MIN_DEG: f64 = 0.0;
pub const PAN_MAX_DEG: f64 = 360.0;

/// Tilt travel limits (degrees).
pub const TILT_MIN_DEG: f64 = 0.0;
pub const TILT_MAX_DEG: f64 = 60.0;

/// Commanded orientation at power-up.
pub const INITIAL_PAN_DEG: f64 = 180.0;
pub const INITIAL_TILT_DEG: f64 = 30.0;

// --- Engagement ---

/// Safe sector protected during an engagement (degrees, inclusive).
pub const SAFE_SECTOR_START_DEG: f64 = 150.0;
pub const SAFE_SECTOR_END_DEG: f64 = 210.0;

/// Simulated sensor / QR acquisition latency before a briefing is available.
pub const BRIEFING_ACQUISITION_DELAY_MS: u64 = 2000;

/// Number of targets drawn per briefing (inclusive bounds).
pub const BRIEFING_MIN_TARGETS: usize = 2;
pub const BRIEFING_MAX_TARGETS: usize = 4;

// --- No-fire zone ---

/// Bounds pre-filled when the operator opens the no-fire zone dialog.
pub const DEFAULT_NO_FIRE_START_DEG: f64 = 0.0;
pub const DEFAULT_NO_FIRE_END_DEG: f64 = 30.0;

// --- Replay ---

/// Replay file format version written and accepted.
pub const REPLAY_FORMAT_VERSION: &str = "1.0";

/// Directory used when no explicit replay path is given.
pub const DEFAULT_REPLAY_DIR: &str = "replays";

/// Replay event type tags.
pub const EVENT_FIRE: &str = "fire";
pub const EVENT_FIRE_DENIED: &str = "fire_denied";
pub const EVENT_MODE_CHANGE: &str = "mode_change";
pub const EVENT_BRIEFING: &str = "briefing";
pub const EVENT_SYSTEM: &str = "system";
pub const EVENT_EMERGENCY_STOP: &str = "emergency_stop";
pub const EVENT_NO_FIRE_ZONE: &str = "no_fire_zone";

// --- Randomness ---

/// Default RNG seed. Same seed = same briefings and hit/miss draws.
pub const DEFAULT_SEED: u64 = 42;
