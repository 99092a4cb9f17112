use super::lane::LaneId;

/// Value a lane shows after `elapsed_secs` whole seconds of the main phase.
///
/// Always in `[1, cycle_secs]`; the reset moment (`elapsed % cycle == 0`)
/// shows the full cycle length instead of 0.
#[inline]
pub fn project(elapsed_secs: u64, cycle_secs: u32) -> u32 {
    debug_assert!(cycle_secs > 0);
    let cycle = u64::from(cycle_secs.max(1));
    (cycle - elapsed_secs % cycle) as u32
}

#[inline]
pub fn is_reset_moment(value: u32, cycle_secs: u32) -> bool {
    value == cycle_secs
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    pub old: Option<u32>,
}

/// Last-shown value for a single display. `None` until the first update.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueMemory {
    last: Option<u32>,
}

impl ValueMemory {
    pub fn update(&mut self, value: u32) -> Transition {
        let old = self.last.replace(value);
        Transition {
            changed: old != Some(value),
            old,
        }
    }
}

/// Gate that turns the 100ms poll into at most one effect per second per lane.
#[derive(Clone, Debug, Default)]
pub struct TransitionDetector {
    lanes: [ValueMemory; 3],
}

impl TransitionDetector {
    pub fn detect(&mut self, lane: LaneId, value: u32) -> Transition {
        self.lanes[lane.index()].update(value)
    }
}
