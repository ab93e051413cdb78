//! Reusable UI widgets

pub mod button;
pub mod input_field;
pub mod popup;

pub use button::Button;
pub use input_field::InputField;
pub use popup::{Popup, centered_rect};
