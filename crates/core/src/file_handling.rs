//! Reading the settings file.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::{Settings, MAX_COURSE_COST};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads settings from the YAML file at `config_path`.
///
/// A missing file is not an error; defaults are used instead.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if it does not
/// contain a valid settings mapping, or if `course_cost` is larger than
/// [`MAX_COURSE_COST`].
pub fn get_settings(config_path: &str) -> Result<Settings> {
    if !Path::new(config_path).exists() {
        debug!("No config at `{}`, using defaults", config_path);
        return Ok(Settings::default());
    }

    let reader = get_reader("config", config_path)?;

    let settings: Settings = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if settings.course_cost > MAX_COURSE_COST {
        return Err(Error::invalid_config(
            config_path,
            format!(
                "course_cost {} exceeds the maximum of {}",
                settings.course_cost, MAX_COURSE_COST
            ),
        ));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");

        let settings = get_settings(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_reads_course_cost() {
        let file = write_config("course_cost: 650\n");
        let settings = get_settings(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.course_cost, 650);
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let file = write_config("{}\n");
        let settings = get_settings(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.course_cost, 500);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = write_config("course_price: 10\n");
        let result = get_settings(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let file = write_config("course_cost: -1\n");
        let result = get_settings(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_course_cost_at_maximum_is_accepted() {
        let file = write_config(&format!("course_cost: {MAX_COURSE_COST}\n"));
        let settings = get_settings(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.course_cost, MAX_COURSE_COST);
    }

    #[test]
    fn test_course_cost_above_maximum_is_rejected() {
        let file = write_config(&format!("course_cost: {}\n", MAX_COURSE_COST + 1));
        let result = get_settings(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));

        let file = write_config("course_cost: 18446744073709551615\n");
        let error = get_settings(file.path().to_str().unwrap()).unwrap_err();
        assert!(!error.is_recoverable());
        assert!(error.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = get_settings(dir.path().to_str().unwrap());
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_recoverable());
    }
}
