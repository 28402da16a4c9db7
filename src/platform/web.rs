//! Browser scheduler backed by `requestAnimationFrame` and `setInterval`
//!
//! The callbacks live in shared slots filled in after the session exists,
//! since they need a handle to it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::scheduler::{FrameHandle, IntervalHandle, Scheduler};

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
pub type IntervalCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct WebScheduler {
    window: web_sys::Window,
    frame_callback: FrameCallback,
    interval_callback: IntervalCallback,
}

impl WebScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            frame_callback: Rc::new(RefCell::new(None)),
            interval_callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Slot for the closure run on each display frame
    pub fn frame_slot(&self) -> FrameCallback {
        self.frame_callback.clone()
    }

    /// Slot for the closure run on each interval tick
    pub fn interval_slot(&self) -> IntervalCallback {
        self.interval_callback.clone()
    }
}

impl Scheduler for WebScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.frame_callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before callback was installed");
            return None;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }

    fn start_interval(&mut self, period_ms: u32) -> Option<IntervalHandle> {
        let slot = self.interval_callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Interval requested before callback was installed");
            return None;
        };
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            ) {
            Ok(id) => Some(IntervalHandle(id)),
            Err(e) => {
                log::warn!("setInterval failed: {:?}", e);
                None
            }
        }
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        self.window.clear_interval_with_handle(handle.0);
    }
}
