//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `form_page`: Page layout shared by both forms
//! - `login_form` / `register_form`: The two form pages

mod field_renderer;
mod form_page;
mod login_form;
mod register_form;

pub use login_form::draw_login;
pub use register_form::draw_register;
