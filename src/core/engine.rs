use super::clock::ClockOrigin;
use super::constants::{EFFECT_HOLD_MS, POLL_INTERVAL_MS, PREROLL_SECS};
use super::countdown::{project, TransitionDetector};
use super::effects::{dispatch, Effect, Effects, TransientStates};
use super::lane::{lane_spec, LaneId, MuteState};
use super::preroll::{PreRoll, PreRollStep};
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct TimerParams {
    pub poll_interval: Duration,
    pub preroll: Duration,
    pub effect_hold: Duration,
}

impl Default for TimerParams {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            preroll: Duration::from_secs(PREROLL_SECS),
            effect_hold: Duration::from_millis(EFFECT_HOLD_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PreRoll,
    Running,
}

/// Everything the front-end needs to apply after one poll.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Current value per lane (indexed by `LaneId::index`), present on every
    /// poll once the main timers run.
    pub values: Option<[u32; 3]>,
    pub effects: Effects,
}

impl Frame {
    pub fn value(&self, lane: LaneId) -> Option<u32> {
        self.values.map(|v| v[lane.index()])
    }
}

pub struct CountdownEngine {
    pub params: TimerParams,
    mute: MuteState,
    preroll: PreRoll,
    origin: ClockOrigin,
    detector: TransitionDetector,
    transients: TransientStates,
}

impl CountdownEngine {
    pub fn new(params: TimerParams) -> Self {
        let preroll = PreRoll::new(params.preroll);
        Self {
            params,
            mute: MuteState::default(),
            preroll,
            origin: ClockOrigin::default(),
            detector: TransitionDetector::default(),
            transients: TransientStates::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.origin().is_some() {
            Phase::Running
        } else if self.preroll.is_counting() {
            Phase::PreRoll
        } else {
            Phase::Idle
        }
    }

    pub fn origin(&self) -> Option<Instant> {
        self.origin.get()
    }

    pub fn toggle_mute(&mut self, lane: LaneId) -> Option<bool> {
        let muted = self.mute.toggle(lane);
        if let Some(m) = muted {
            log::info!("[mute] {} muted={}", lane.name(), m);
        }
        muted
    }

    /// Start the pre-roll. Returns false if it was already started.
    pub fn start(&mut self, now: Instant) -> bool {
        let started = self.preroll.start(now);
        if started {
            log::info!("[preroll] countdown started");
        }
        started
    }

    pub fn tick(&mut self, now: Instant) -> Frame {
        let mut frame = Frame::default();
        self.transients.expire(now, &mut frame.effects);

        match self.preroll.poll(now, &self.mute, &mut frame.effects) {
            PreRollStep::Idle | PreRollStep::Counting => return frame,
            PreRollStep::Finished => {
                self.origin.set_once(now);
                log::info!("[timer] main timers started");
                return frame;
            }
            PreRollStep::Done => {}
        }

        let elapsed = match self.origin.elapsed_secs(now) {
            Some(e) => e,
            None => return frame,
        };
        let mut values = [0u32; 3];
        for id in LaneId::ALL {
            let lane = lane_spec(id);
            let value = project(elapsed, lane.cycle_secs);
            values[lane.id.index()] = value;
            if !self.detector.detect(lane.id, value).changed {
                continue;
            }
            let d = dispatch(lane, value, &self.mute);
            if let Some(state) = d.state {
                self.transients
                    .arm(lane.id, state, now, self.params.effect_hold);
                frame.effects.push(Effect::AddState {
                    lane: lane.id,
                    state,
                });
            }
            if let Some(sound) = d.sound {
                frame.effects.push(Effect::Play(sound));
            }
        }
        frame.values = Some(values);
        frame
    }
}
