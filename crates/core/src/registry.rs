//! The registry of student records.
//!
//! The registry owns every [`StudentRecord`] for the lifetime of a session,
//! hands out ids from its own [`IdSequence`], and resolves id-scoped
//! operations to the matching record.

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::money::Money;
use crate::record::StudentRecord;
use crate::reports::{Admission, BalanceStatement, Enrollment, Payment, StatusReport};

/// Width that student ids are zero-padded to.
pub const ID_WIDTH: usize = 5;

/// Cost charged per course enrollment when no configuration overrides it.
pub const DEFAULT_COURSE_COST: u64 = 500;

/// Sequential student id generator: `00001`, `00002`, ...
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the sequence and returns the new id.
    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("{:0width$}", self.last, width = ID_WIDTH)
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    records: IndexMap<String, StudentRecord>,
    ids: IdSequence,
    course_cost: Money,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Money::from_units(DEFAULT_COURSE_COST))
    }
}

impl Registry {
    #[must_use]
    pub fn new(course_cost: Money) -> Self {
        Self {
            records: IndexMap::new(),
            ids: IdSequence::new(),
            course_cost,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.course_cost())
    }

    #[must_use]
    pub fn course_cost(&self) -> Money {
        self.course_cost
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the order they were added.
    pub fn students(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.values()
    }

    /// Adds a new student and returns the admission with its fresh id.
    pub fn add_student(&mut self, name: &str) -> Admission {
        let id = self.ids.next_id();
        let record = StudentRecord::new(id.clone(), name.to_string());
        self.records.insert(id.clone(), record);
        info!("Added student `{}` as {}", name, id);

        Admission {
            id,
            name: name.to_string(),
        }
    }

    /// Looks up a record by its exact id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&StudentRecord> {
        debug!("Looking up student {}", id);
        self.records.get(id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Result<&mut StudentRecord> {
        debug!("Looking up student {} for update", id);
        self.records.get_mut(id).ok_or_else(|| {
            warn!("No student with id {}", id);
            Error::not_found(id)
        })
    }

    fn resolve(&self, id: &str) -> Result<&StudentRecord> {
        self.find_by_id(id).ok_or_else(|| {
            warn!("No student with id {}", id);
            Error::not_found(id)
        })
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no student has `id`.
    pub fn enroll_student(&mut self, id: &str, course: &str) -> Result<Enrollment> {
        let cost = self.course_cost;
        Ok(self.find_by_id_mut(id)?.enroll(course, cost))
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no student has `id`.
    pub fn view_balance(&self, id: &str) -> Result<BalanceStatement> {
        Ok(self.resolve(id)?.view_balance())
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no student has `id`, or
    /// [`Error::InvalidAmount`] if the record refuses the payment.
    pub fn pay_tuition(&mut self, id: &str, amount: Money) -> Result<Payment> {
        self.find_by_id_mut(id)?.pay_tuition(amount)
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no student has `id`.
    pub fn show_status(&self, id: &str) -> Result<StatusReport> {
        Ok(self.resolve(id)?.show_status())
    }
}
