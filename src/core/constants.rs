// Timing constants for the countdown engine, in milliseconds or whole seconds.

// Cycle length of each lane, in seconds
pub const LEFT_CYCLE_SECS: u32 = 15;
pub const RIGHT_CYCLE_SECS: u32 = 20;
pub const BOTTOM_CYCLE_SECS: u32 = 12;

// Final seconds that get a pulse (and a spoken cue on voiced lanes)
pub const CUE_FIRST: u32 = 1;
pub const CUE_LAST: u32 = 3;

// Poll period driving every evaluation
pub const POLL_INTERVAL_MS: u64 = 100;

// Gate before the main timers start
pub const PREROLL_SECS: u64 = 4;

// How long a pulse/flash class stays on an element
pub const EFFECT_HOLD_MS: u64 = 500;

// Prompt shown on the start button during the pre-roll
pub const PREROLL_PROMPT_PREFIX: &str = "REST/LOGIN IN";
