use crate::audio::SoundBank;
use crate::core::{CountdownEngine, Effect, LaneId};
use crate::dom::LaneElements;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PollContext {
    pub engine: Rc<RefCell<CountdownEngine>>,
    pub sounds: Rc<SoundBank>,
    pub lanes: [LaneElements; 3],
    pub document: web::Document,
}

impl PollContext {
    fn lane(&self, lane: LaneId) -> &LaneElements {
        &self.lanes[lane.index()]
    }

    pub fn poll(&mut self) {
        // Release the engine borrow before touching the DOM or audio.
        let frame = self.engine.borrow_mut().tick(Instant::now());

        for lane in LaneId::ALL {
            if let Some(value) = frame.value(lane) {
                self.lane(lane).show_value(value);
            }
        }

        for effect in frame.effects {
            match effect {
                Effect::AddState { lane, state } => self.lane(lane).add_class(state.class_name()),
                Effect::RemoveState { lane, state } => {
                    self.lane(lane).remove_class(state.class_name())
                }
                Effect::Play(sound) => self.sounds.play(sound),
                Effect::SetPrompt(text) => overlay::set_prompt(&self.document, &text),
                Effect::HideOverlay => {
                    if !overlay::is_hidden(&self.document) {
                        overlay::hide(&self.document);
                    }
                }
            }
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<PollContext>>, period: Duration) {
    let Some(window) = web::window() else {
        log::error!("[timer] no window; poll loop not started");
        return;
    };
    let tick = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().poll();
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        period.as_millis() as i32,
    ) {
        Ok(_) => tick.forget(),
        Err(e) => log::error!("[timer] setInterval failed: {:?}", e),
    }
}
