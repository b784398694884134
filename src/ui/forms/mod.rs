//! Form rendering module
//!
//! - `field_renderer`: single-line field rendering
//! - `property_form`: the property form with its sections and actions

mod field_renderer;
mod property_form;

pub use field_renderer::help_line;
pub use property_form::{draw as draw_property_form, form_height};
