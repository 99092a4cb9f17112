#![cfg(target_arch = "wasm32")]
use crate::core::{CountdownEngine, LaneId, TimerParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rounds-countdown starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let lanes = [
        dom::LaneElements::find(&document, LaneId::Left)?,
        dom::LaneElements::find(&document, LaneId::Right)?,
        dom::LaneElements::find(&document, LaneId::Bottom)?,
    ];
    let sounds = Rc::new(
        audio::SoundBank::load().map_err(|_| anyhow::anyhow!("audio samples unavailable"))?,
    );

    let params = TimerParams::default();
    let period = params.poll_interval;
    let engine = Rc::new(RefCell::new(CountdownEngine::new(params)));

    let controls = events::Controls {
        engine: engine.clone(),
        sounds: sounds.clone(),
        document: document.clone(),
    };
    events::buttons::wire_start_button(&controls);
    events::buttons::wire_mute_buttons(&controls);
    events::buttons::wire_reset_link(&controls);
    events::keyboard::wire_global_keydown(controls);

    // The poll runs from page load; it is a no-op until the pre-roll starts.
    let poll_ctx = Rc::new(RefCell::new(frame::PollContext {
        engine,
        sounds,
        lanes,
        document,
    }));
    frame::start_loop(poll_ctx, period);

    Ok(())
}
