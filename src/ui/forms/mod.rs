//! Form rendering module
//!
//! - `field_renderer`: text input and selector widgets
//! - `question_form`: the add-question form with its banners

mod field_renderer;
mod question_form;

pub use question_form::draw_question_form;
