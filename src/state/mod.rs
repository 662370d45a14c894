//! Application state module

mod app_state;
mod banner;
mod forms;
mod theme;
mod timer;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use theme::{Palette, ThemeController};

#[cfg(test)]
pub use theme::Theme;
