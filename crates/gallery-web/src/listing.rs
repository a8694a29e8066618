//! Public gallery grid plus the private-enquiry overlay.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use gallery_core::Artwork;

use crate::dom;
use crate::AppState;

/// Rebuild the `#gallery-grid` cards from the current listing.
pub fn render(document: &web::Document, state: &Rc<AppState>) {
    let Some(grid) = document.get_element_by_id("gallery-grid") else {
        log::error!("[listing] missing #gallery-grid");
        return;
    };
    grid.set_inner_html("");

    for artwork in state.artworks.borrow().iter() {
        if let Some(card) = build_card(document, artwork) {
            let _ = grid.append_child(&card);
        }
    }
}

fn build_card(document: &web::Document, artwork: &Artwork) -> Option<web::Element> {
    let card = document.create_element("article").ok()?;
    let _ = card.set_attribute("class", "artwork-card");

    let img = document.create_element("img").ok()?;
    let _ = img.set_attribute("src", &artwork.image_url);
    let _ = img.set_attribute("alt", &artwork.title);
    let _ = card.append_child(&img);

    let title = document.create_element("h4").ok()?;
    title.set_text_content(Some(&artwork.title));
    let _ = card.append_child(&title);

    let byline = document.create_element("p").ok()?;
    byline.set_text_content(Some(&format!(
        "{} \u{2022} {} \u{2022} {}",
        artwork.artist, artwork.medium, artwork.year
    )));
    let _ = card.append_child(&byline);

    let dims = document.create_element("p").ok()?;
    dims.set_text_content(Some(&artwork.dimensions));
    let _ = card.append_child(&dims);

    let enquire = document.create_element("button").ok()?;
    enquire.set_text_content(Some("Enquire"));
    {
        let title = artwork.title.clone();
        let artist = artwork.artist.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(doc) = dom::window_document() {
                open_enquiry(&doc, &title, &artist);
            }
        }) as Box<dyn FnMut()>);
        let _ = enquire.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    let _ = card.append_child(&enquire);

    Some(card)
}

fn open_enquiry(document: &web::Document, title: &str, artist: &str) {
    dom::set_text(document, "enquiry-title", title);
    dom::set_textarea_value(
        document,
        "enquiry-message",
        &format!(
            "I am interested in the piece titled \"{title}\" by {artist}. \
             Could you please provide more information regarding acquisition?"
        ),
    );
    dom::show(document, "enquiry-modal");
}

/// One-time wiring for the enquiry overlay's own controls.
pub fn wire_enquiry(document: &web::Document) {
    dom::add_click_listener(document, "enquiry-close", || {
        if let Some(doc) = dom::window_document() {
            dom::hide(&doc, "enquiry-modal");
        }
    });
    dom::add_click_listener(document, "enquiry-send", || {
        dom::alert("Inquiry sent successfully. A curator will contact you shortly.");
        if let Some(doc) = dom::window_document() {
            dom::hide(&doc, "enquiry-modal");
        }
    });
}
