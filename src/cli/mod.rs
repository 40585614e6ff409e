//! CLI module - argument parsing and interactive prompts

mod args;
pub mod inspect;
mod prompts;

pub use args::{Cli, Commands};
pub use prompts::*;
