#![cfg(target_arch = "wasm32")]
//! Browser frontend for the gallery site.
//!
//! Startup fetches the artwork listing (failing soft to the seed set),
//! renders the public grid, mounts the scroll-driven hero assembly view and
//! wires the curator portal. All state is owned on the single UI thread and
//! shared with event closures through `Rc`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use gallery_core::Artwork;

pub mod api;
pub mod dashboard;
pub mod dom;
pub mod frame;
pub mod hero;
pub mod listing;
pub mod session;

/// Shared application state captured by the event closures.
pub struct AppState {
    pub artworks: RefCell<Vec<Artwork>>,
    /// Id of the record currently loaded into the dashboard form, if any.
    pub editing: RefCell<Option<String>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let state = Rc::new(AppState {
        artworks: RefCell::new(api::fetch_artworks().await),
        editing: RefCell::new(None),
    });
    log::info!(
        "[init] listing ready with {} artworks",
        state.artworks.borrow().len()
    );

    listing::render(&document, &state);
    listing::wire_enquiry(&document);
    dashboard::wire(&document, state.clone());

    // The hero view runs for the page's lifetime; its ticker stops if the
    // view is ever dropped.
    let hero_view = hero::HeroView::mount(&window, &document)?;
    std::mem::forget(hero_view);

    Ok(())
}
