//! # materia
//!
//! Graphics backend agnostic core for Material-style widgets.
//!
//! This crate provides the primitives, animation driver and widget trait that
//! interactive controls build on. Rendering is handled by backends that
//! consume the [`FullOutput`] shape list.
//!
//! ## Core Types
//!
//! - [`Widget`] - Retained interactive element driven by the host
//! - [`PaintCtx`] - Skin, text measurer and output handed to `paint`
//! - [`FullOutput`] - Shapes produced by a paint pass
//!
//! ## Animation
//!
//! - [`AnimationManager`] - Tick-driven progress animations
//! - [`AnimationType`] - Easing curve applied when progress is read
//!
//! ## Input & Events
//!
//! - [`WidgetEvent`] - Pointer events in widget-local coordinates
//! - [`MouseState`] - Out / hover / down state of a widget
//!
//! ## Theming
//!
//! - [`Skin`] - Theme, color scheme and label font
//! - [`ContentMeasurer`] - Trait for text measurement

mod animation;
mod color;
pub mod easing;
mod events;
mod hit_test;
mod input;
mod measure;
mod output;
mod primitives;
mod skin;
mod widget;

// Core types
pub use color::*;
pub use output::*;
pub use primitives::*;
pub use widget::*;

// Animation
pub use animation::*;
pub use easing::{lerp_color, lerp_f32, AnimationType, EasingFn};

// Input & Events
pub use events::*;
pub use hit_test::*;
pub use input::*;

// Theming
pub use measure::*;
pub use skin::*;
