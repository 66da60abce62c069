use std::str::FromStr;

use student_records_core::error::{Error, Result};
use student_records_core::money::Money;

/// One registry operation with its arguments.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Command {
    Add { name: String },
    Enroll { id: String, course: String },
    Balance { id: String },
    Pay { id: String, amount: Money },
    Status { id: String },
    Exit,
}

/// Splits off the first whitespace-delimited word; the rest is kept verbatim.
fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace).unwrap_or((text, ""))
}

/// Splits off the leading id, skipping any run of separators before it.
fn split_id(text: &str) -> (&str, &str) {
    split_word(text.trim_start())
}

fn required<'a>(value: &'a str, command: &str, argument: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::missing_argument(command, argument))
    } else {
        Ok(value)
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Parses a script line such as `enroll 00001 Intro to Rust`.
    ///
    /// The final argument of `add` and `enroll` takes the rest of the line,
    /// so names and courses may contain spaces. Ids may be preceded by any
    /// amount of whitespace. `balance` and `status` read only the id; any
    /// further words on the line are ignored. Command words are
    /// case-insensitive.
    fn from_str(line: &str) -> Result<Self> {
        let (word, rest) = split_word(line.trim_start());
        let word = word.to_lowercase();

        match word.as_str() {
            "add" => Ok(Self::Add {
                name: rest.to_string(),
            }),
            "enroll" => {
                let (id, course) = split_id(rest);
                Ok(Self::Enroll {
                    id: required(id, &word, "student id")?.to_string(),
                    course: course.to_string(),
                })
            }
            "balance" => {
                let (id, _) = split_id(rest);
                Ok(Self::Balance {
                    id: required(id, &word, "student id")?.to_string(),
                })
            }
            "pay" => {
                let (id, amount) = split_id(rest);
                let id = required(id, &word, "student id")?;
                let amount = required(amount.trim(), &word, "payment amount")?;
                Ok(Self::Pay {
                    id: id.to_string(),
                    amount: amount.parse()?,
                })
            }
            "status" => {
                let (id, _) = split_id(rest);
                Ok(Self::Status {
                    id: required(id, &word, "student id")?.to_string(),
                })
            }
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(Error::UnknownCommand(word)),
        }
    }
}
