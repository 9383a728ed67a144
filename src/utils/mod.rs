//! Utility module - terminal styling, spinners and logging

mod logging;
mod progress;
mod styling;

pub use logging::*;
pub use progress::*;
pub use styling::*;
