//! Platform glue: page reloads and future spawning.

use std::cell::Cell;

/// Forces a full reload of the current page.
pub trait PageReloader {
    fn reload(&self);
}

impl<T: PageReloader + ?Sized> PageReloader for std::rc::Rc<T> {
    fn reload(&self) {
        (**self).reload()
    }
}

/// Counts reload requests instead of performing them (native builds, tests).
#[derive(Debug, Default)]
pub struct RecordingReloader {
    count: Cell<usize>,
}

impl RecordingReloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reloads(&self) -> usize {
        self.count.get()
    }
}

impl PageReloader for RecordingReloader {
    fn reload(&self) {
        self.count.set(self.count.get() + 1);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{spawn_future, WindowReloader};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::PageReloader;
    use std::future::Future;

    /// `window.location.reload()`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WindowReloader;

    impl PageReloader for WindowReloader {
        fn reload(&self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(err) = window.location().reload() {
                log::warn!("[i18n] Page reload failed: {err:?}");
            }
        }
    }

    /// Run a future on the page's event loop.
    pub fn spawn_future<F>(future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}
