use crate::constants::{
    BOTTOM_LANE_ID, FULLSCREEN_METHODS, FULLSCREEN_SELECTOR, LEFT_LANE_ID, LEFT_MUTE_BUTTON_ID, MUTE_ICON_SELECTOR,
    NUMBER_SELECTOR, RIGHT_LANE_ID, RIGHT_MUTE_BUTTON_ID,
};
use crate::core::LaneId;
use crate::input;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
        );
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("missing #{}; click handler not wired", element_id);
    }
}

#[inline]
pub fn lane_element_id(lane: LaneId) -> &'static str {
    match lane {
        LaneId::Left => LEFT_LANE_ID,
        LaneId::Right => RIGHT_LANE_ID,
        LaneId::Bottom => BOTTOM_LANE_ID,
    }
}

#[inline]
pub fn mute_button_id(lane: LaneId) -> Option<&'static str> {
    match lane {
        LaneId::Left => Some(LEFT_MUTE_BUTTON_ID),
        LaneId::Right => Some(RIGHT_MUTE_BUTTON_ID),
        LaneId::Bottom => None,
    }
}

/// Lane container and its `.number` child, looked up once at start-up.
#[derive(Clone)]
pub struct LaneElements {
    pub root: web::Element,
    pub number: web::Element,
}

impl LaneElements {
    pub fn find(document: &web::Document, lane: LaneId) -> anyhow::Result<Self> {
        let id = lane_element_id(lane);
        let root = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
        let number = root
            .query_selector(NUMBER_SELECTOR)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("missing {} in #{}", NUMBER_SELECTOR, id))?;
        Ok(Self { root, number })
    }

    pub fn show_value(&self, value: u32) {
        let text = value.to_string();
        if self.number.text_content().as_deref() != Some(text.as_str()) {
            self.number.set_text_content(Some(&text));
        }
    }

    pub fn add_class(&self, class: &str) {
        _ = self.root.class_list().add_1(class);
    }

    pub fn remove_class(&self, class: &str) {
        _ = self.root.class_list().remove_1(class);
    }
}

pub fn set_mute_icon(document: &web::Document, lane: LaneId, muted: bool) {
    let (Some(button_id), Some(src)) = (mute_button_id(lane), input::mute_icon(lane, muted)) else {
        return;
    };
    if let Some(button) = document.get_element_by_id(button_id) {
        if let Ok(Some(icon)) = button.query_selector(MUTE_ICON_SELECTOR) {
            _ = icon.set_attribute("src", src);
        }
    }
}

pub fn is_mobile_device(window: &web::Window) -> bool {
    let ua = window.navigator().user_agent().unwrap_or_default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX);
    let has_touch = js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false);
    input::is_mobile(&ua, width, has_touch)
}

/// First fullscreen entry point the element exposes, standard name first.
fn fullscreen_method(el: &web::Element) -> Option<js_sys::Function> {
    FULLSCREEN_METHODS.iter().find_map(|name| {
        js_sys::Reflect::get(el, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    })
}

/// Ask for fullscreen on the container. Failure is logged and otherwise
/// ignored, including a rejected promise from the browser.
pub fn request_fullscreen(document: &web::Document) {
    let container = match document.query_selector(FULLSCREEN_SELECTOR) {
        Ok(Some(el)) => el,
        _ => {
            log::warn!("missing {}; fullscreen skipped", FULLSCREEN_SELECTOR);
            return;
        }
    };
    let Some(method) = fullscreen_method(&container) else {
        log::info!("Fullscreen not supported");
        return;
    };
    match method.call0(&container) {
        Ok(result) => {
            if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::info!("Fullscreen request failed: {:?}", e);
                    }
                });
            }
        }
        Err(e) => log::info!("Fullscreen request failed: {:?}", e),
    }
}

pub fn reload_page() {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}
