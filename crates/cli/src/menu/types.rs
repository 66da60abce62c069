//! Type definitions for the menu.

use std::fmt::{Display, Formatter};

/// One entry of the main menu.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MenuChoice {
    AddStudent,
    Enroll,
    ViewBalance,
    PayTuition,
    ShowStatus,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddStudent,
        MenuChoice::Enroll,
        MenuChoice::ViewBalance,
        MenuChoice::PayTuition,
        MenuChoice::ShowStatus,
        MenuChoice::Exit,
    ];

    /// The number a user types to pick this entry.
    #[must_use]
    pub fn key(self) -> char {
        match self {
            MenuChoice::AddStudent => '1',
            MenuChoice::Enroll => '2',
            MenuChoice::ViewBalance => '3',
            MenuChoice::PayTuition => '4',
            MenuChoice::ShowStatus => '5',
            MenuChoice::Exit => '6',
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::Enroll => "Enroll in Course",
            MenuChoice::ViewBalance => "View Balance",
            MenuChoice::PayTuition => "Pay Tuition",
            MenuChoice::ShowStatus => "Show Status",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Maps typed input to an entry, ignoring surrounding whitespace.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}
