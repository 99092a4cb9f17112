use crate::constants::{
    LEFT_ICON_MUTED, LEFT_ICON_UNMUTED, MOBILE_MAX_WIDTH_PX, MOBILE_UA_MARKERS, RIGHT_ICON_MUTED,
    RIGHT_ICON_UNMUTED, SOUNDS_DIR, VOICE_EXT,
};
use crate::core::{LaneId, Voice};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Start,
    ToggleMute(LaneId),
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Enter" => Some(KeyAction::Start),
        "l" | "L" => Some(KeyAction::ToggleMute(LaneId::Left)),
        "r" | "R" => Some(KeyAction::ToggleMute(LaneId::Right)),
        _ => None,
    }
}

// ---------------- Device heuristics ----------------
pub fn is_mobile(user_agent: &str, inner_width: f64, has_touch: bool) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
        || (inner_width <= MOBILE_MAX_WIDTH_PX && has_touch)
}

// ---------------- Asset paths ----------------
#[inline]
pub fn voice_sample_path(voice: Voice, number: u32) -> String {
    format!("{}/{}/{}.{}", SOUNDS_DIR, voice.dir_name(), number, VOICE_EXT)
}

/// Icon for a mute button; `None` for lanes without one.
#[inline]
pub fn mute_icon(lane: LaneId, muted: bool) -> Option<&'static str> {
    match (lane, muted) {
        (LaneId::Left, true) => Some(LEFT_ICON_MUTED),
        (LaneId::Left, false) => Some(LEFT_ICON_UNMUTED),
        (LaneId::Right, true) => Some(RIGHT_ICON_MUTED),
        (LaneId::Right, false) => Some(RIGHT_ICON_UNMUTED),
        (LaneId::Bottom, _) => None,
    }
}
