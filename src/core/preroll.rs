use super::clock::elapsed_since;
use super::constants::PREROLL_PROMPT_PREFIX;
use super::countdown::ValueMemory;
use super::effects::{is_cue_value, Effect, Effects, Sound};
use super::lane::{LaneId, MuteState, Voice};
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub enum PreRollState {
    NotStarted,
    Counting {
        started_at: Instant,
        shown: ValueMemory,
    },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreRollStep {
    Idle,
    Counting,
    /// The gate expired on this poll; main timers start now.
    Finished,
    /// Already finished on an earlier poll.
    Done,
}

/// One-shot gate counting down before the main timers start.
#[derive(Clone, Debug)]
pub struct PreRoll {
    length: Duration,
    state: PreRollState,
}

pub fn prompt_text(remaining: u32) -> String {
    format!("{} {}", PREROLL_PROMPT_PREFIX, remaining)
}

impl PreRoll {
    pub fn new(length: Duration) -> Self {
        Self {
            length,
            state: PreRollState::NotStarted,
        }
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.state, PreRollState::Counting { .. })
    }

    /// Begin counting. Only valid from `NotStarted`; later calls return false.
    pub fn start(&mut self, now: Instant) -> bool {
        match self.state {
            PreRollState::NotStarted => {
                self.state = PreRollState::Counting {
                    started_at: now,
                    shown: ValueMemory::default(),
                };
                true
            }
            _ => false,
        }
    }

    /// Whole seconds still shown while counting, rounded up.
    pub fn display_value(&self, now: Instant) -> Option<u32> {
        match self.state {
            PreRollState::Counting { started_at, .. } => {
                let elapsed = elapsed_since(now, started_at);
                let remaining = self.length.saturating_sub(elapsed);
                Some(remaining.as_secs_f64().ceil() as u32)
            }
            _ => None,
        }
    }

    /// Advance the gate. Voice cues are gated per lane; the completion pop is
    /// gated by the left lane only.
    pub fn poll(&mut self, now: Instant, mute: &MuteState, out: &mut Effects) -> PreRollStep {
        let display = match self.display_value(now) {
            Some(v) => v,
            None => {
                return match self.state {
                    PreRollState::Finished => PreRollStep::Done,
                    _ => PreRollStep::Idle,
                }
            }
        };

        if let PreRollState::Counting { shown, .. } = &mut self.state {
            if shown.update(display).changed && display > 0 {
                out.push(Effect::SetPrompt(prompt_text(display)));
                if is_cue_value(display) {
                    for voice in [Voice::Male, Voice::Female] {
                        if !mute.is_muted(voice.lane()) {
                            out.push(Effect::Play(Sound::Voice(voice, display)));
                        }
                    }
                }
                log::debug!("[preroll] {}", display);
            }
        }

        if display > 0 {
            return PreRollStep::Counting;
        }

        self.state = PreRollState::Finished;
        out.push(Effect::HideOverlay);
        if !mute.is_muted(LaneId::Left) {
            out.push(Effect::Play(Sound::Pop));
        }
        PreRollStep::Finished
    }
}
