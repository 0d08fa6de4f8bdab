//! Support for library configuration options

use std::sync::{Arc, Mutex};

use csscolorparser::Color;
use once_cell::sync::Lazy;

/// The color given to tasks that are created without an explicit one.
/// This starts out as matplotlib's familiar "tab:blue" (`#1f77b4`).
/// Feel free to override it when initing this library.
pub static DEFAULT_COLOR: Lazy<Arc<Mutex<Color>>> = Lazy::new(|| {
    let tab_blue = csscolorparser::parse("#1f77b4").unwrap(/* this cannot panic since this is a valid color spec */);
    Arc::new(Mutex::new(tab_blue))
});

/// The current default task color
pub fn default_color() -> Color {
    DEFAULT_COLOR.lock().unwrap().clone()
}
