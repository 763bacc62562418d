//! HTTP middleware.

mod logging;
mod preflight;

pub use logging::*;
pub use preflight::*;
