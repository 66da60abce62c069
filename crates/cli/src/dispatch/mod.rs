//! Command dispatch for student-records.
//!
//! Every front end, whether the interactive menu or a script file, reduces
//! user input to a [`Command`] with typed arguments. [`execute`] runs it
//! against the registry and returns a [`Response`] for rendering, so the
//! registry never touches the terminal.

// Export public items from submodules
pub mod command;
pub mod execute;

// Re-exports for convenience
pub use command::Command;
pub use execute::{execute, Response};
