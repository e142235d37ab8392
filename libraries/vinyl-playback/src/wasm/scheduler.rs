//! `requestAnimationFrame` frame loop

use super::{describe, window};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use vinyl_core::Result;
use vinyl_visual::FrameScheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameScheduler`] that runs once per display refresh
///
/// The callback re-registers itself every frame and lives as long as the
/// page.
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

fn request(window: &Window, callback: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        warn!("requestAnimationFrame failed: {}", describe(&e));
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn start(&mut self, mut frame: Box<dyn FnMut()>) {
        let handle: FrameClosure = Rc::new(RefCell::new(None));
        let next = Rc::clone(&handle);
        let window = self.window.clone();

        *handle.borrow_mut() = Some(Closure::new(move || {
            frame();
            if let Some(callback) = next.borrow().as_ref() {
                request(&window, callback);
            }
        }));

        let first = handle.borrow();
        if let Some(callback) = first.as_ref() {
            request(&self.window, callback);
        }
    }
}
