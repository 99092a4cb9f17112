use super::constants::{BOTTOM_CYCLE_SECS, LEFT_CYCLE_SECS, RIGHT_CYCLE_SECS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneId {
    Left,
    Right,
    Bottom,
}

impl LaneId {
    pub const ALL: [LaneId; 3] = [LaneId::Left, LaneId::Right, LaneId::Bottom];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            LaneId::Left => 0,
            LaneId::Right => 1,
            LaneId::Bottom => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LaneId::Left => "left",
            LaneId::Right => "right",
            LaneId::Bottom => "bottom",
        }
    }
}

/// Sample set a lane speaks its final seconds with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Voice {
    Male,
    Female,
}

impl Voice {
    /// Lane whose mute flag gates this voice.
    pub fn lane(self) -> LaneId {
        match self {
            Voice::Male => LaneId::Left,
            Voice::Female => LaneId::Right,
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            Voice::Male => "male",
            Voice::Female => "female",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneSpec {
    pub id: LaneId,
    pub cycle_secs: u32,
    pub voice: Option<Voice>,
}

pub const LANES: [LaneSpec; 3] = [
    LaneSpec {
        id: LaneId::Left,
        cycle_secs: LEFT_CYCLE_SECS,
        voice: Some(Voice::Male),
    },
    LaneSpec {
        id: LaneId::Right,
        cycle_secs: RIGHT_CYCLE_SECS,
        voice: Some(Voice::Female),
    },
    LaneSpec {
        id: LaneId::Bottom,
        cycle_secs: BOTTOM_CYCLE_SECS,
        voice: None,
    },
];

#[inline]
pub fn lane_spec(id: LaneId) -> &'static LaneSpec {
    &LANES[id.index()]
}

/// Per-lane mute flags. The bottom lane has no audio and is never muted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MuteState {
    pub left: bool,
    pub right: bool,
}

impl MuteState {
    pub fn is_muted(&self, lane: LaneId) -> bool {
        match lane {
            LaneId::Left => self.left,
            LaneId::Right => self.right,
            LaneId::Bottom => false,
        }
    }

    /// Flip a lane's flag and return the new value; `None` for the bottom lane.
    pub fn toggle(&mut self, lane: LaneId) -> Option<bool> {
        let flag = match lane {
            LaneId::Left => &mut self.left,
            LaneId::Right => &mut self.right,
            LaneId::Bottom => return None,
        };
        *flag = !*flag;
        Some(*flag)
    }
}
