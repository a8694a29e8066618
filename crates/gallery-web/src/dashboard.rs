//! Curator portal: login, the archive form (create / edit), the inventory
//! list and the AI metadata assist.
//!
//! Mutations are confirmed-then-applied: the local list changes only after
//! the backend call succeeds. A failed call leaves everything as it was and
//! raises a blocking alert.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use gallery_core::{
    prepend, remove_by_id, replace_by_id, Artwork, CredentialVerifier, Draft, StaticPasscodes,
};

use crate::{api, dom, listing, session, AppState};

/// One-time wiring of every portal control.
pub fn wire(document: &web::Document, state: Rc<AppState>) {
    // Portal entry: straight to the dashboard when already authenticated,
    // otherwise through the login overlay.
    {
        let state_c = state.clone();
        dom::add_click_listener(document, "curator-portal-btn", move || {
            let Some(doc) = dom::window_document() else {
                return;
            };
            if session::is_authenticated() {
                open_dashboard(&doc, &state_c);
            } else {
                dom::show(&doc, "login-modal");
            }
        });
    }

    {
        let state_c = state.clone();
        dom::add_click_listener(document, "login-submit", move || {
            if let Some(doc) = dom::window_document() {
                attempt_login(&doc, &state_c);
            }
        });
    }
    // Enter in the passcode field submits too.
    if let Some(field) = document.get_element_by_id("login-password") {
        let state_c = state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |ev: web::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    if let Some(doc) = dom::window_document() {
                        attempt_login(&doc, &state_c);
                    }
                }
            },
        ) as Box<dyn FnMut(_)>);
        let _ = field.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    dom::add_click_listener(document, "login-close", || {
        if let Some(doc) = dom::window_document() {
            dom::hide(&doc, "login-modal");
        }
    });

    dom::add_click_listener(document, "logout-btn", || {
        session::clear();
        if let Some(doc) = dom::window_document() {
            dom::hide(&doc, "dashboard-overlay");
        }
        log::info!("[login] signed out");
    });
    dom::add_click_listener(document, "dashboard-close", || {
        if let Some(doc) = dom::window_document() {
            dom::hide(&doc, "dashboard-overlay");
        }
    });

    {
        let state_c = state.clone();
        dom::add_click_listener(document, "art-submit", move || {
            if let Some(doc) = dom::window_document() {
                submit_draft(&doc, &state_c);
            }
        });
    }
    {
        let state_c = state.clone();
        dom::add_click_listener(document, "art-cancel-edit", move || {
            let Some(doc) = dom::window_document() else {
                return;
            };
            *state_c.editing.borrow_mut() = None;
            write_draft(&doc, &Draft::default());
        });
    }
    dom::add_click_listener(document, "ai-assist", || {
        if let Some(doc) = dom::window_document() {
            request_suggestion(&doc);
        }
    });
}

fn open_dashboard(document: &web::Document, state: &Rc<AppState>) {
    render_inventory(document, state);
    dom::show(document, "dashboard-overlay");
}

fn attempt_login(document: &web::Document, state: &Rc<AppState>) {
    let passcode = dom::input_value(document, "login-password");
    if StaticPasscodes::gallery_default().verify(&passcode) {
        session::set_authenticated();
        dom::set_input_value(document, "login-password", "");
        dom::hide(document, "login-error");
        dom::hide(document, "login-modal");
        open_dashboard(document, state);
        log::info!("[login] curator authenticated");
    } else {
        dom::set_input_value(document, "login-password", "");
        dom::show(document, "login-error");
        log::info!("[login] rejected credential");
    }
}

fn read_draft(document: &web::Document) -> Draft {
    Draft {
        image_url: dom::input_value(document, "art-image-url"),
        title: dom::input_value(document, "art-title"),
        artist: dom::input_value(document, "art-artist"),
        year: dom::input_value(document, "art-year"),
        medium: dom::input_value(document, "art-medium"),
        dimensions: dom::input_value(document, "art-dimensions"),
    }
}

fn write_draft(document: &web::Document, draft: &Draft) {
    dom::set_input_value(document, "art-image-url", &draft.image_url);
    dom::set_input_value(document, "art-title", &draft.title);
    dom::set_input_value(document, "art-artist", &draft.artist);
    dom::set_input_value(document, "art-year", &draft.year);
    dom::set_input_value(document, "art-medium", &draft.medium);
    dom::set_input_value(document, "art-dimensions", &draft.dimensions);
}

fn submit_draft(document: &web::Document, state: &Rc<AppState>) {
    let draft = read_draft(document);
    if !draft.is_submittable() {
        log::info!("[form] submit ignored, title is empty");
        return;
    }
    let editing = state.editing.borrow().clone();
    let state = state.clone();
    let document = document.clone();
    spawn_local(async move {
        let outcome = match &editing {
            Some(id) => api::update_artwork(id, &draft).await,
            None => api::create_artwork(&draft).await,
        };
        match outcome {
            Ok(saved) => {
                {
                    let mut list = state.artworks.borrow_mut();
                    if editing.is_some() {
                        replace_by_id(&mut list, saved);
                    } else {
                        prepend(&mut list, saved);
                    }
                }
                *state.editing.borrow_mut() = None;
                write_draft(&document, &Draft::default());
                dom::set_textarea_value(&document, "ai-prompt", "");
                listing::render(&document, &state);
                render_inventory(&document, &state);
            }
            Err(e) => {
                log::error!("[api] save failed: {:?}", e);
                dom::alert("Could not save the artwork. Please try again.");
            }
        }
    });
}

fn request_suggestion(document: &web::Document) {
    let prompt = dom::textarea_value(document, "ai-prompt");
    if prompt.trim().is_empty() {
        return;
    }
    let document = document.clone();
    spawn_local(async move {
        match api::suggest_metadata(&prompt).await {
            Ok(suggestion) => {
                // Fill empty fields only; curator-typed values win.
                let mut draft = read_draft(&document);
                draft.apply_suggestion(&suggestion);
                write_draft(&document, &draft);
            }
            Err(e) => {
                log::error!("[api] metadata suggestion failed: {:?}", e);
            }
        }
    });
}

/// Rebuild the `#archive-list` rows with their edit/delete controls.
pub fn render_inventory(document: &web::Document, state: &Rc<AppState>) {
    let Some(container) = document.get_element_by_id("archive-list") else {
        log::error!("[dashboard] missing #archive-list");
        return;
    };
    container.set_inner_html("");

    for artwork in state.artworks.borrow().iter() {
        if let Some(row) = build_row(document, state, artwork) {
            let _ = container.append_child(&row);
        }
    }
    dom::set_text(
        document,
        "archive-count",
        &format!("{} Items Indexed", state.artworks.borrow().len()),
    );
}

fn build_row(
    document: &web::Document,
    state: &Rc<AppState>,
    artwork: &Artwork,
) -> Option<web::Element> {
    let row = document.create_element("div").ok()?;
    let _ = row.set_attribute("class", "archive-row");

    let label = document.create_element("span").ok()?;
    label.set_text_content(Some(&format!("{} — {}", artwork.title, artwork.artist)));
    let _ = row.append_child(&label);

    let edit = document.create_element("button").ok()?;
    edit.set_text_content(Some("Edit"));
    {
        let state = state.clone();
        let artwork = artwork.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let Some(doc) = dom::window_document() else {
                return;
            };
            *state.editing.borrow_mut() = Some(artwork.id.clone());
            write_draft(&doc, &Draft::from_artwork(&artwork));
            if let Some(form) = doc.get_element_by_id("archive-form") {
                form.scroll_into_view();
            }
        }) as Box<dyn FnMut()>);
        let _ = edit.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    let _ = row.append_child(&edit);

    let delete = document.create_element("button").ok()?;
    delete.set_text_content(Some("Delete"));
    {
        let state = state.clone();
        let id = artwork.id.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                match api::delete_artwork(&id).await {
                    Ok(()) => {
                        // Unknown ids fall through as a quiet no-op.
                        remove_by_id(&mut state.artworks.borrow_mut(), &id);
                        if let Some(doc) = dom::window_document() {
                            listing::render(&doc, &state);
                            render_inventory(&doc, &state);
                        }
                    }
                    Err(e) => {
                        log::error!("[api] delete failed: {:?}", e);
                        dom::alert("Could not delete the artwork. Please try again.");
                    }
                }
            });
        }) as Box<dyn FnMut()>);
        let _ = delete.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    let _ = row.append_child(&delete);

    Some(row)
}
