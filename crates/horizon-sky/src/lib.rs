pub mod boundary;
pub mod gradient;
pub mod heuristics;
pub mod pipeline;
pub mod present;
pub mod regime;
pub mod scattering;
pub mod solar;

pub use pipeline::{compute_sky, default_view_angles, SkyComputation};
pub use present::SkyViewModel;
