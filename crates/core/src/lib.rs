//! Student Records Core Library
//!
//! This crate holds the in-memory domain of student-records: student records,
//! the registry that owns them, tuition money, and the reports each operation
//! returns. It performs no terminal I/O, so every operation can be driven
//! directly from tests or from any front end.
//!
//! # Key Features
//!
//! - **Registry**: Insertion-ordered records with sequential, zero-padded ids
//! - **Tuition**: Per-course charges and validated payments on exact money amounts
//! - **Reports**: Typed results that render as user-facing confirmations
//! - **Configuration**: Optional YAML settings for the course cost
//! - **Error Handling**: One error type separating recoverable and fatal failures
//!
//! # Examples
//!
//! ```
//! use student_records_core::money::Money;
//! use student_records_core::registry::Registry;
//!
//! let mut registry = Registry::default();
//! let admission = registry.add_student("Alice");
//! assert_eq!(admission.id, "00001");
//!
//! registry.enroll_student(&admission.id, "Math")?;
//! let payment = registry.pay_tuition(&admission.id, "120.50".parse()?)?;
//! assert_eq!(payment.balance, Money::from_cents(37950));
//! # Ok::<(), student_records_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod money;
pub mod record;
pub mod registry;
pub mod reports;
