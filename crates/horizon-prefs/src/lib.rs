mod error;
mod model;

pub use error::PrefsError;
pub use model::{round_coord, Preferences};
