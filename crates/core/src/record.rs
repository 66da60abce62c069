use log::{info, warn};

use crate::error::{InvalidAmount, Result};
use crate::money::Money;
use crate::reports::{BalanceStatement, Enrollment, Payment, StatusReport};

/// One student's identity, enrollment and tuition balance.
///
/// Fields are private: the balance can only move through [`Self::enroll`]
/// and [`Self::pay_tuition`], which keep it non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    id: String,
    name: String,
    courses: Vec<String>,
    balance: Money,
}

impl StudentRecord {
    /// Creates a record with no courses and a zero balance.
    ///
    /// Ids are handed out by [`crate::registry::Registry`]; nothing here
    /// checks them for uniqueness.
    pub(crate) fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
            balance: Money::ZERO,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    #[must_use]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Appends `course` and charges `cost` to the balance.
    ///
    /// Course names are taken as given; empty and repeated names are kept.
    pub fn enroll(&mut self, course: &str, cost: Money) -> Enrollment {
        self.courses.push(course.to_string());
        self.balance += cost;
        info!(
            "Enrolled {} in `{}`, balance now {}",
            self.id, course, self.balance
        );

        Enrollment {
            name: self.name.clone(),
            course: course.to_string(),
            balance: self.balance,
        }
    }

    #[must_use]
    pub fn view_balance(&self) -> BalanceStatement {
        BalanceStatement {
            id: self.id.clone(),
            name: self.name.clone(),
            balance: self.balance,
        }
    }

    /// Pays `amount` off the balance.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAmount::NotPositive`] for zero or negative amounts and
    /// [`InvalidAmount::ExceedsBalance`] when `amount` is larger than the
    /// outstanding balance. The balance is untouched in both cases.
    pub fn pay_tuition(&mut self, amount: Money) -> Result<Payment> {
        if !amount.is_positive() {
            warn!("Rejected non-positive payment of {} for {}", amount, self.id);
            return Err(InvalidAmount::NotPositive.into());
        }

        if amount > self.balance {
            warn!(
                "Rejected payment of {} for {}: balance is {}",
                amount, self.id, self.balance
            );
            return Err(InvalidAmount::ExceedsBalance {
                balance: self.balance,
            }
            .into());
        }

        self.balance -= amount;
        info!("{} paid {}, balance now {}", self.id, amount, self.balance);

        Ok(Payment {
            name: self.name.clone(),
            amount,
            balance: self.balance,
        })
    }

    #[must_use]
    pub fn show_status(&self) -> StatusReport {
        StatusReport {
            id: self.id.clone(),
            name: self.name.clone(),
            courses: self.courses.clone(),
            balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn alice() -> StudentRecord {
        StudentRecord::new("00001".to_string(), "Alice".to_string())
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = alice();
        assert_eq!(record.id(), "00001");
        assert_eq!(record.name(), "Alice");
        assert!(record.courses().is_empty());
        assert_eq!(record.balance(), Money::ZERO);
    }

    #[test]
    fn test_enroll_charges_course_cost() {
        let mut record = alice();
        let enrollment = record.enroll("Math", Money::from_units(500));

        assert_eq!(enrollment.course, "Math");
        assert_eq!(enrollment.balance, Money::from_units(500));
        assert_eq!(enrollment.to_string(), "Alice has been enrolled in Math");
        assert_eq!(record.courses(), ["Math"]);
    }

    #[test]
    fn test_enroll_keeps_duplicate_and_empty_courses() {
        let mut record = alice();
        record.enroll("Math", Money::from_units(500));
        record.enroll("Math", Money::from_units(500));
        record.enroll("", Money::from_units(500));

        assert_eq!(record.courses(), ["Math", "Math", ""]);
        assert_eq!(record.balance(), Money::from_units(1500));
    }

    #[test]
    fn test_pay_tuition_reduces_balance() {
        let mut record = alice();
        record.enroll("Math", Money::from_units(500));

        let payment = record.pay_tuition(Money::from_units(200)).unwrap();
        assert_eq!(payment.amount, Money::from_units(200));
        assert_eq!(payment.balance, Money::from_units(300));
        assert_eq!(record.balance(), Money::from_units(300));
    }

    #[test]
    fn test_pay_full_balance() {
        let mut record = alice();
        record.enroll("Math", Money::from_units(500));

        record.pay_tuition(Money::from_units(500)).unwrap();
        assert_eq!(record.balance(), Money::ZERO);
    }

    #[test]
    fn test_pay_rejects_non_positive_amounts() {
        let mut record = alice();
        record.enroll("Math", Money::from_units(500));

        for amount in [Money::ZERO, Money::from_cents(-100)] {
            let result = record.pay_tuition(amount);
            assert!(matches!(
                result,
                Err(Error::InvalidAmount(InvalidAmount::NotPositive))
            ));
        }
        assert_eq!(record.balance(), Money::from_units(500));
    }

    #[test]
    fn test_pay_rejects_overdraft() {
        let mut record = alice();
        record.enroll("Math", Money::from_units(500));

        let result = record.pay_tuition(Money::from_units(600));
        match result {
            Err(Error::InvalidAmount(InvalidAmount::ExceedsBalance { balance })) => {
                assert_eq!(balance, Money::from_units(500));
            }
            other => panic!("Expected overdraft rejection, got {other:?}"),
        }
        assert_eq!(record.balance(), Money::from_units(500));
    }

    #[test]
    fn test_pay_on_zero_balance_is_rejected() {
        let mut record = alice();
        assert!(record.pay_tuition(Money::from_units(100)).is_err());
        assert_eq!(record.balance(), Money::ZERO);
    }

    #[test]
    fn test_view_balance_and_status_do_not_mutate() {
        let mut record = alice();
        record.enroll("Math", Money::from_units(500));
        let before = record.clone();

        let statement = record.view_balance();
        assert_eq!(
            statement.to_string(),
            "The balance for Alice (ID: 00001) is $500"
        );

        let status = record.show_status();
        assert_eq!(status.courses, vec!["Math".to_string()]);
        assert_eq!(record, before);
    }
}
