//! Reusable UI components

mod error_banner;
mod panel;
mod success_panel;

pub use error_banner::render_error_banner;
pub use success_panel::{render_success_panel, success_panel_height};
