use super::Controls;
use crate::constants::{RESET_LINK_ID, START_BUTTON_ID};
use crate::core::LaneId;
use crate::dom;

pub fn wire_start_button(controls: &Controls) {
    let c = controls.clone();
    dom::add_click_listener(&controls.document, START_BUTTON_ID, move |_| c.start());
}

pub fn wire_mute_buttons(controls: &Controls) {
    for lane in [LaneId::Left, LaneId::Right] {
        let Some(id) = dom::mute_button_id(lane) else {
            continue;
        };
        let c = controls.clone();
        dom::add_click_listener(&controls.document, id, move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            c.toggle_mute(lane);
        });
    }
}

pub fn wire_reset_link(controls: &Controls) {
    dom::add_click_listener(&controls.document, RESET_LINK_ID, move |ev| {
        ev.prevent_default();
        log::info!("[timer] reset requested");
        dom::reload_page();
    });
}
