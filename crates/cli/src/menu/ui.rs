use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use student_records_core::error::{Error, Result};

use super::types::MenuChoice;
use crate::dispatch::Response;

const BANNER: &str = "Student Management System";

/// Semantic colors for terminal output.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tone {
    Heading,
    Success,
    Info,
    Warning,
    Failure,
}

impl Tone {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tone::Heading => Color::Cyan,
            Tone::Success => Color::Green,
            Tone::Info => Color::Reset,
            Tone::Warning => Color::Yellow,
            Tone::Failure => Color::Red,
        }
    }

    fn is_bold(self) -> bool {
        self == Tone::Heading
    }

    fn of_response(response: &Response) -> Self {
        match response {
            Response::Added(_) | Response::Enrolled(_) | Response::Paid(_) => Tone::Success,
            Response::Balance(_) | Response::Status(_) | Response::Exit => Tone::Info,
        }
    }
}

/// Writes menus, responses and errors, with or without color.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Writes `text` followed by a newline in the given tone.
    pub fn line<W: Write>(&self, out: &mut W, tone: Tone, text: &str) -> Result<()> {
        if !self.color {
            writeln!(out, "{text}")?;
            return Ok(());
        }

        if tone.is_bold() {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            SetForegroundColor(tone.color()),
            Print(text),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
        Ok(())
    }

    pub fn banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        self.line(out, Tone::Heading, BANNER)
    }

    pub fn menu<W: Write>(&self, out: &mut W) -> Result<()> {
        self.line(out, Tone::Heading, "Options:")?;
        for choice in MenuChoice::ALL {
            self.line(out, Tone::Info, &format!("  {choice}"))?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn response<W: Write>(&self, out: &mut W, response: &Response) -> Result<()> {
        if matches!(response, Response::Status(_)) {
            writeln!(out)?;
        }
        self.line(out, Tone::of_response(response), &response.to_string())?;
        out.flush()?;
        Ok(())
    }

    pub fn warning<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        self.line(out, Tone::Warning, text)?;
        out.flush()?;
        Ok(())
    }

    pub fn error<W: Write>(&self, out: &mut W, error: &Error) -> Result<()> {
        self.line(out, Tone::Failure, &error.to_string())?;
        out.flush()?;
        Ok(())
    }
}
