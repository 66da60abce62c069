//! Student Records CLI Library
//!
//! This crate provides the command-line interface for student-records, an
//! in-memory tuition ledger for a small roster of students. It handles
//! argument parsing, the interactive menu, script mode, and rendering of
//! registry results.
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`dispatch`]: Typed commands and their execution against the registry
//! - [`menu`]: Prompts, menu choices and colored terminal rendering
//! - [`session`]: The interactive and script loops tying the above together
//!
//! # Examples
//!
//! The CLI binary (`srs`) can be used in several ways:
//!
//! ```bash
//! # Interactive menu
//! srs
//!
//! # Run commands from a file
//! srs --script roster.txt
//!
//! # Pipe commands in, with a custom course cost from config
//! printf 'add Alice\nenroll 00001 Math\nstatus 00001\n' | srs -c ./config.yml -s -
//! ```

pub mod cli_args;
pub mod dispatch;
pub mod menu;
pub mod session;
