//! Configuration for student-records.
//!
//! This module resolves the configuration file path, expanding shell
//! variables like `~`, and defines the settings it may contain.

use serde::Deserialize;

use crate::money::Money;
use crate::registry::DEFAULT_COURSE_COST;

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.student-records/config.yml";

/// Largest course cost whose value in hundredths still fits a [`Money`].
pub const MAX_COURSE_COST: u64 = i64::MAX as u64 / 100;

/// Settings read from the configuration file.
///
/// Every key is optional; a missing file yields [`Settings::default`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Cost charged per course enrollment, in whole currency units.
    #[serde(default = "default_course_cost")]
    pub course_cost: u64,
}

fn default_course_cost() -> u64 {
    DEFAULT_COURSE_COST
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            course_cost: DEFAULT_COURSE_COST,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn course_cost(&self) -> Money {
        Money::from_units(self.course_cost)
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use student_records_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}
