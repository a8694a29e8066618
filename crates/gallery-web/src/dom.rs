use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn input_element(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

pub fn input_value(document: &web::Document, id: &str) -> String {
    input_element(document, id)
        .map(|el| el.value())
        .unwrap_or_default()
}

pub fn set_input_value(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = input_element(document, id) {
        el.set_value(value);
    }
}

fn textarea_element(document: &web::Document, id: &str) -> Option<web::HtmlTextAreaElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
}

pub fn textarea_value(document: &web::Document, id: &str) -> String {
    textarea_element(document, id)
        .map(|el| el.value())
        .unwrap_or_default()
}

pub fn set_textarea_value(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = textarea_element(document, id) {
        el.set_value(value);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        let _ = w.alert_with_message(message);
    }
}
