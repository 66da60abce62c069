use std::fmt::{Display, Formatter};

use log::debug;
use student_records_core::error::Result;
use student_records_core::registry::Registry;
use student_records_core::reports::{
    Admission, BalanceStatement, Enrollment, Payment, StatusReport,
};

use super::Command;

/// The result of a successfully executed [`Command`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Response {
    Added(Admission),
    Enrolled(Enrollment),
    Balance(BalanceStatement),
    Paid(Payment),
    Status(StatusReport),
    Exit,
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Added(admission) => write!(f, "{admission}"),
            Response::Enrolled(enrollment) => write!(f, "{enrollment}"),
            Response::Balance(statement) => write!(f, "{statement}"),
            Response::Paid(payment) => write!(f, "{payment}"),
            Response::Status(status) => write!(f, "{status}"),
            Response::Exit => f.write_str("Exiting the program"),
        }
    }
}

/// Runs `command` against `registry`.
///
/// # Errors
///
/// Returns the registry's error when the id is unknown or a payment is
/// refused. The registry is unchanged in that case.
pub fn execute(registry: &mut Registry, command: Command) -> Result<Response> {
    debug!("Executing {:?}", command);

    Ok(match command {
        Command::Add { name } => Response::Added(registry.add_student(&name)),
        Command::Enroll { id, course } => {
            Response::Enrolled(registry.enroll_student(&id, &course)?)
        }
        Command::Balance { id } => Response::Balance(registry.view_balance(&id)?),
        Command::Pay { id, amount } => Response::Paid(registry.pay_tuition(&id, amount)?),
        Command::Status { id } => Response::Status(registry.show_status(&id)?),
        Command::Exit => Response::Exit,
    })
}
