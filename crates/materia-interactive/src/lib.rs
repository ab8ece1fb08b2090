//! # materia-interactive
//!
//! Interactive Material components built on the `materia` core.
//!
//! - [`RadioButton`] - radio button with animated check transition and click ripples
//! - [`RadioGroup`] - vertical column of mutually exclusive radio buttons

mod radio_button;
mod radio_group;

pub use radio_button::*;
pub use radio_group::*;
