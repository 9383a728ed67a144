//! CLI module - argument parsing, prompts, batch runs and the TUI wizard

pub mod args;
pub mod batch;
pub mod prompts;
pub mod wizard;

pub use args::{Cli, Commands};
pub use batch::{apply_answers, load_answer_file, run_batch, AnswerFile, AnswerInput};
pub use prompts::*;
pub use wizard::{run_wizard, StepAction, WizardApp, WizardResult};
