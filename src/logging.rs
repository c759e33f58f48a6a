//! Console logging helpers
//!
//! Writes to the browser console when running as wasm. Native builds (unit
//! tests, tooling) go to stderr instead, since the console bindings are only
//! callable from inside a JS host.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[debug] {}", message);
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[warn] {}", message);
}

pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[error] {}", message);
}
