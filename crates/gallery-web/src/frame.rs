use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cancelable repeating frame task driven by `requestAnimationFrame`.
///
/// The callback runs once per display frame from `start` until the handle
/// is canceled or dropped. Canceling stops further scheduling; a frame
/// already dispatched still runs to completion.
pub struct Ticker {
    alive: Rc<Cell<bool>>,
}

impl Ticker {
    pub fn start(mut tick_fn: impl FnMut() + 'static) -> Self {
        let alive = Rc::new(Cell::new(true));
        let alive_tick = alive.clone();
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !alive_tick.get() {
                return;
            }
            tick_fn();
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            let _ =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
        Self { alive }
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
