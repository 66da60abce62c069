//! Interactive menu and terminal rendering.
//!
//! This module provides the terminal-facing side of student-records: the
//! numbered option menu, the prompts for names, ids, courses and amounts,
//! and colored rendering of responses and errors.
//!
//! # User Interface
//!
//! The menu offers:
//! - `1`-`5` to add a student, enroll, view a balance, pay tuition or show status
//! - `6` to exit (end of input exits as well)
//!
//! Invalid choices are reported and the menu is shown again.

// Export public items from submodules
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::Prompter;
pub use types::MenuChoice;
pub use ui::{Renderer, Tone};
