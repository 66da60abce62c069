//! Values returned by record operations.
//!
//! Each report carries the data of one completed operation and knows how to
//! render itself as the confirmation line a user sees.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::money::Money;

/// A student was added to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub id: String,
    pub name: String,
}

impl Display for Admission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Student {} with ID {} has been added.",
            self.name, self.id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub name: String,
    pub course: String,
    pub balance: Money,
}

impl Display for Enrollment {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} has been enrolled in {}",
            self.name, self.course
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceStatement {
    pub id: String,
    pub name: String,
    pub balance: Money,
}

impl Display for BalanceStatement {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "The balance for {} (ID: {}) is ${}",
            self.name, self.id, self.balance
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub name: String,
    pub amount: Money,
    pub balance: Money,
}

impl Display for Payment {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} has paid ${}. Current balance is ${}",
            self.name, self.amount, self.balance
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub id: String,
    pub name: String,
    pub courses: Vec<String>,
    pub balance: Money,
}

impl Display for StatusReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(formatter, "Student Name: {}", self.name)?;
        writeln!(formatter, "Student ID: {}", self.id)?;
        writeln!(formatter, "Courses Enrolled: {}", self.courses.iter().join(", "))?;
        write!(formatter, "Tuition Balance: ${}", self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_display() {
        let admission = Admission {
            id: "00001".to_string(),
            name: "Alice".to_string(),
        };
        assert_eq!(
            admission.to_string(),
            "Student Alice with ID 00001 has been added."
        );
    }

    #[test]
    fn test_payment_display() {
        let payment = Payment {
            name: "Alice".to_string(),
            amount: Money::from_cents(12050),
            balance: Money::from_cents(37950),
        };
        assert_eq!(
            payment.to_string(),
            "Alice has paid $120.50. Current balance is $379.50"
        );
    }

    #[test]
    fn test_status_display_joins_courses() {
        let status = StatusReport {
            id: "00002".to_string(),
            name: "Bob".to_string(),
            courses: vec!["Math".to_string(), "History".to_string()],
            balance: Money::from_units(1000),
        };
        assert_eq!(
            status.to_string(),
            "Student Name: Bob\nStudent ID: 00002\nCourses Enrolled: Math, History\nTuition Balance: $1000"
        );
    }

    #[test]
    fn test_status_display_without_courses() {
        let status = StatusReport {
            id: "00003".to_string(),
            name: "Cleo".to_string(),
            courses: Vec::new(),
            balance: Money::ZERO,
        };
        assert!(status.to_string().contains("Courses Enrolled: \n"));
    }
}
