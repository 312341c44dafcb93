use thiserror::Error;

/// Errors that can surface from the sky computation pipeline.
#[derive(Debug, Error)]
pub enum SkyError {
    #[error("coordinate out of range: lat {lat_deg}, lon {lon_deg}")]
    InvalidCoordinate { lat_deg: f64, lon_deg: f64 },

    #[error("atmospheric parameter '{name}' out of domain: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
