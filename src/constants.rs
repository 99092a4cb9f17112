// DOM hooks, asset paths and device heuristics used by the web front-end.

// Lane containers; each holds a `.number` child
pub const LEFT_LANE_ID: &str = "leftCountdown";
pub const RIGHT_LANE_ID: &str = "rightCountdown";
pub const BOTTOM_LANE_ID: &str = "bottomCountdown";
pub const NUMBER_SELECTOR: &str = ".number";

// Start overlay
pub const START_OVERLAY_ID: &str = "startOverlay";
pub const START_BUTTON_ID: &str = "startButton";
pub const HIDDEN_CLASS: &str = "hidden";
pub const FULLSCREEN_SELECTOR: &str = ".container";
// Tried in order; the first one the element exposes wins
pub const FULLSCREEN_METHODS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

// Mute buttons and their icons
pub const LEFT_MUTE_BUTTON_ID: &str = "leftMuteButton";
pub const RIGHT_MUTE_BUTTON_ID: &str = "rightMuteButton";
pub const MUTE_ICON_SELECTOR: &str = ".mute-icon";
pub const LEFT_ICON_MUTED: &str = "icons/mute.png";
pub const LEFT_ICON_UNMUTED: &str = "icons/volume.png";
pub const RIGHT_ICON_MUTED: &str = "icons/mute-white.png";
pub const RIGHT_ICON_UNMUTED: &str = "icons/volume-white.png";

// Reset link (reloads the page)
pub const RESET_LINK_ID: &str = "resetTimer";

// Audio assets
pub const SOUNDS_DIR: &str = "sounds";
pub const VOICE_EXT: &str = "ogg";
pub const POP_PATH: &str = "sounds/pop.mp3";

// Mobile detection
pub const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;
