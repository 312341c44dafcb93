pub mod color;
pub mod constants;
pub mod error;
pub mod sample;
pub mod types;

pub use color::LinearRgb;
pub use error::SkyError;
pub use sample::{GradientStop, OpticalDepth, ScatteringSample, SkySnapshot};
pub use types::{AtmosphericParameters, GeoCoordinate, Influences, Regime, SolarPosition};
