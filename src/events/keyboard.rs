use super::Controls;
use crate::input::{action_for_key, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controls: &Controls) {
    if ev.repeat() {
        return;
    }
    match action_for_key(&ev.key()) {
        Some(KeyAction::Start) => {
            controls.start();
            ev.prevent_default();
        }
        Some(KeyAction::ToggleMute(lane)) => {
            controls.toggle_mute(lane);
            log::info!("[keys] toggled {} mute", lane.name());
        }
        None => {}
    }
}

pub fn wire_global_keydown(controls: Controls) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &controls);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
