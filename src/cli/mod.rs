//! CLI flow for the interactive open pull request count.
//!
//! - [`prompt`]: Owner and repository prompts with validation
//! - [`open_count`]: The prompt → rate-limit → fetch → report sequence
//!
//! Output formatting utilities are in [`output`].

pub mod open_count;
pub mod output;
pub mod prompt;
