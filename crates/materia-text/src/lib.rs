//! # materia-text
//!
//! Text measurement backends for materia widgets.
//!
//! With the default `cosmic` feature, [`CosmicMeasurer`] shapes labels through
//! cosmic-text so preferred sizes match what a text renderer will draw.
//! Without it, [`default_measurer`] falls back to the fixed-advance
//! [`MonospaceMeasurer`](materia::MonospaceMeasurer).

use materia::ContentMeasurer;

#[cfg(feature = "cosmic")]
mod cosmic;

#[cfg(feature = "cosmic")]
pub use cosmic::CosmicMeasurer;

/// Best measurer available with the enabled features
pub fn default_measurer() -> Box<dyn ContentMeasurer> {
    #[cfg(feature = "cosmic")]
    {
        Box::new(CosmicMeasurer::new())
    }
    #[cfg(not(feature = "cosmic"))]
    {
        log::debug!("cosmic feature disabled, measuring text with fixed advances");
        Box::new(materia::MonospaceMeasurer::default())
    }
}
