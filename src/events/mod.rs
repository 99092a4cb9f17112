use crate::audio::SoundBank;
use crate::core::{CountdownEngine, LaneId, Phase};
use crate::{dom, overlay};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod buttons;
pub mod keyboard;

/// Handles shared by every user-input callback.
#[derive(Clone)]
pub struct Controls {
    pub engine: Rc<RefCell<CountdownEngine>>,
    pub sounds: Rc<SoundBank>,
    pub document: web::Document,
}

impl Controls {
    /// Start gesture: unlock audio, go fullscreen on phones, begin the pre-roll.
    pub fn start(&self) {
        if self.engine.borrow().phase() != Phase::Idle {
            return;
        }
        if let Some(w) = web::window() {
            if dom::is_mobile_device(&w) {
                dom::request_fullscreen(&self.document);
            }
        }
        self.sounds.prime();
        overlay::disable_start_button(&self.document);
        self.engine.borrow_mut().start(Instant::now());
    }

    pub fn toggle_mute(&self, lane: LaneId) {
        let muted = self.engine.borrow_mut().toggle_mute(lane);
        if let Some(m) = muted {
            dom::set_mute_icon(&self.document, lane, m);
        }
    }
}
