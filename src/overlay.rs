use crate::constants::{HIDDEN_CLASS, START_BUTTON_ID, START_OVERLAY_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// Show the pre-roll prompt on the start button
pub fn set_prompt(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(START_BUTTON_ID) {
        el.set_text_content(Some(text));
    }
}

pub fn disable_start_button(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_BUTTON_ID) {
        match el.dyn_ref::<web::HtmlButtonElement>() {
            Some(button) => button.set_disabled(true),
            None => {
                _ = el.set_attribute("disabled", "");
            }
        }
    }
}
