//! Hero assembly view: wires scroll/resize input to the smoothing loop and
//! writes the interpolated transforms onto the five panel elements.
//!
//! Expected markup: a tall `#hero-track` section (four viewport heights)
//! containing sticky `#hero-panel-0` .. `#hero-panel-4` elements anchored at
//! the viewport center.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use gallery_core::{transform_at, ScrollProgress, Viewport, HERO_TRACK_SCREENS, PANEL_COUNT};

use crate::frame::Ticker;

pub struct HeroView {
    _ticker: Ticker,
}

impl HeroView {
    /// Locate the hero elements, wire scroll and resize listeners, paint the
    /// initial frame and start the per-frame smoothing loop. The returned
    /// view owns the ticker; dropping it stops the loop.
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let track = document
            .get_element_by_id("hero-track")
            .ok_or_else(|| anyhow::anyhow!("missing #hero-track"))?;
        // Pin the track to its four-screen height so the stylesheet cannot
        // silently change the animation's scroll distance.
        if let Some(el) = track.dyn_ref::<web::HtmlElement>() {
            let _ = el
                .style()
                .set_property("height", &format!("{}vh", (HERO_TRACK_SCREENS * 100.0) as u32));
        }

        let mut panels: Vec<web::HtmlElement> = Vec::with_capacity(PANEL_COUNT);
        for i in 0..PANEL_COUNT {
            let el = document
                .get_element_by_id(&format!("hero-panel-{i}"))
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                .ok_or_else(|| anyhow::anyhow!("missing #hero-panel-{i}"))?;
            panels.push(el);
        }
        let panels = Rc::new(panels);

        let viewport = Rc::new(Cell::new(current_viewport(window)));
        let progress = Rc::new(RefCell::new(ScrollProgress::new()));

        // Seed the target from wherever the page is already scrolled to.
        retarget(&track, viewport.get(), &mut progress.borrow_mut());

        // Scroll handler: one bounding-rect read, then numeric writes only.
        // The re-render happens in the frame loop, never here.
        {
            let track_s = track.clone();
            let viewport_s = viewport.clone();
            let progress_s = progress.clone();
            let closure = Closure::wrap(Box::new(move || {
                retarget(&track_s, viewport_s.get(), &mut progress_s.borrow_mut());
            }) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        // Resize handler: refresh the viewport, retarget since the track
        // geometry moved with it, and repaint right away. The ticker only
        // repaints when the smoothed value moves, so a settled page would
        // otherwise keep transforms computed for the old viewport.
        {
            let track_r = track.clone();
            let viewport_r = viewport.clone();
            let progress_r = progress.clone();
            let panels_r = panels.clone();
            let closure = Closure::wrap(Box::new(move || {
                if let Some(w) = web::window() {
                    viewport_r.set(current_viewport(&w));
                }
                retarget(&track_r, viewport_r.get(), &mut progress_r.borrow_mut());
                apply_transforms(&panels_r, progress_r.borrow().displayed(), viewport_r.get());
            }) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        // Paint frame zero so the panels never flash unstyled.
        apply_transforms(&panels, progress.borrow().displayed(), viewport.get());

        let progress_tick = progress.clone();
        let viewport_tick = viewport.clone();
        let ticker = Ticker::start(move || {
            let moved = progress_tick.borrow_mut().step();
            if moved {
                let p = progress_tick.borrow().displayed();
                apply_transforms(&panels, p, viewport_tick.get());
            }
        });

        log::info!("[hero] mounted, smoothing loop running");
        Ok(Self { _ticker: ticker })
    }
}

fn current_viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    Viewport::new(width, height)
}

fn retarget(track: &web::Element, viewport: Viewport, progress: &mut ScrollProgress) {
    let rect = track.get_bounding_client_rect();
    progress.set_scroll(rect.top() as f32, rect.height() as f32, viewport.height);
}

fn apply_transforms(panels: &[web::HtmlElement], p: f32, viewport: Viewport) {
    for (i, el) in panels.iter().enumerate() {
        let t = transform_at(p, viewport, i);
        let style = el.style();
        let _ = style.set_property("transform", &t.css_transform());
        let _ = style.set_property("opacity", &format!("{:.3}", t.opacity));
        let _ = style.set_property("z-index", &t.z_index.to_string());
    }
}
