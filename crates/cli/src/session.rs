//! Session loops driving the registry.
//!
//! A session ends on an exit command or end of input. Recoverable errors,
//! such as an unknown id or a refused payment, are rendered and the session
//! carries on; only I/O failures end it early.

use std::io::{BufRead, Write};

use log::{debug, warn};
use student_records_core::error::Result;
use student_records_core::registry::Registry;

use crate::dispatch::{execute, Command, Response};
use crate::menu::input::decode_line;
use crate::menu::{MenuChoice, Prompter, Renderer};

const CHOICE_PROMPT: &str = "Select an option (1-6): ";
const NAME_PROMPT: &str = "Enter Student name: ";
const ID_PROMPT: &str = "Enter student id: ";
const COURSE_PROMPT: &str = "Enter course name: ";
const AMOUNT_PROMPT: &str = "Enter payment amount: ";
const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please select again.";

/// Executes `command` and renders the outcome.
///
/// Returns whether the session should stop.
fn run_command<W: Write>(
    registry: &mut Registry,
    command: Command,
    out: &mut W,
    renderer: &Renderer,
) -> Result<bool> {
    match execute(registry, command) {
        Ok(response) => {
            renderer.response(out, &response)?;
            Ok(response == Response::Exit)
        }
        Err(e) if e.is_recoverable() => {
            renderer.error(out, &e)?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Prompts for the arguments of `choice`, or `None` at end of input.
fn read_command<R: BufRead, W: Write>(
    choice: MenuChoice,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<Command>> {
    let command = match choice {
        MenuChoice::AddStudent => {
            let Some(name) = prompter.prompt_line(NAME_PROMPT)? else {
                return Ok(None);
            };
            Command::Add { name }
        }
        MenuChoice::Enroll => {
            let Some(id) = prompter.prompt_line(ID_PROMPT)? else {
                return Ok(None);
            };
            let Some(course) = prompter.prompt_line(COURSE_PROMPT)? else {
                return Ok(None);
            };
            Command::Enroll { id, course }
        }
        MenuChoice::ViewBalance => {
            let Some(id) = prompter.prompt_line(ID_PROMPT)? else {
                return Ok(None);
            };
            Command::Balance { id }
        }
        MenuChoice::PayTuition => {
            let Some(id) = prompter.prompt_line(ID_PROMPT)? else {
                return Ok(None);
            };
            let Some(amount) = prompter.prompt_amount(AMOUNT_PROMPT)? else {
                return Ok(None);
            };
            Command::Pay { id, amount }
        }
        MenuChoice::ShowStatus => {
            let Some(id) = prompter.prompt_line(ID_PROMPT)? else {
                return Ok(None);
            };
            Command::Status { id }
        }
        MenuChoice::Exit => Command::Exit,
    };

    Ok(Some(command))
}

/// Runs the menu loop until the user exits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    registry: &mut Registry,
    prompter: &mut Prompter<R, W>,
    renderer: &Renderer,
) -> Result<()> {
    renderer.banner(prompter.output())?;

    loop {
        renderer.menu(prompter.output())?;

        let command = match prompter.prompt_line(CHOICE_PROMPT)? {
            None => Command::Exit,
            Some(typed) => {
                let Some(choice) = MenuChoice::from_input(&typed) else {
                    debug!("Invalid menu choice `{}`", typed);
                    renderer.warning(prompter.output(), INVALID_CHOICE_MESSAGE)?;
                    continue;
                };
                read_command(choice, prompter)?.unwrap_or(Command::Exit)
            }
        };

        if run_command(registry, command, prompter.output(), renderer)? {
            return Ok(());
        }
    }
}

/// Runs one command per line of `script` until `exit` or end of input.
///
/// Blank lines and lines starting with `#` are skipped. Lines that do not
/// parse are reported and skipped. Invalid UTF-8 is decoded lossily.
///
/// # Errors
///
/// Returns an error if reading the script or writing output fails.
pub fn run_script<R: BufRead, W: Write>(
    registry: &mut Registry,
    script: R,
    out: &mut W,
    renderer: &Renderer,
) -> Result<()> {
    for (index, line) in script.split(b'\n').enumerate() {
        let line = decode_line(&line?);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) if e.is_recoverable() => {
                warn!("Skipping script line {}: {}", index + 1, e);
                renderer.error(out, &e)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        if run_command(registry, command, out, renderer)? {
            break;
        }
    }

    Ok(())
}
