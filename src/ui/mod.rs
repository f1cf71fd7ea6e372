//! Terminal output for the vendorsync binary

pub mod icon;
pub mod json;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod views;

use terminal::detect_capabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        let caps = detect_capabilities();
        Self {
            json,
            verbose,
            color: caps.supports_color && !json,
            unicode: caps.supports_unicode,
        }
    }
}
