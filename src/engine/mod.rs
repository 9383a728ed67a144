//! Engine module - the questionnaire state machine and its data model

pub mod answers;
pub mod driver;
pub mod error;
pub mod question;
pub mod state;

pub use answers::*;
pub use driver::SubmissionDriver;
pub use error::{Result, ValidationError, WizardError};
pub use question::*;
pub use state::*;
