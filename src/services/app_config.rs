use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub const DATA_DIR_ENV: &str = "INVOICE_ROI_DATA_DIR";
pub const REPORT_DIR_ENV: &str = "INVOICE_ROI_REPORT_DIR";

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Where scenarios, the email-capture log and generated reports live.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub report_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("roi-data"),
            report_dir: PathBuf::from("reports"),
        }
    }
}

impl AppConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, AppConfigError> {
        let path = PathBuf::from(filepath);
        let contents = fs::read_to_string(&path).map_err(|source| AppConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| AppConfigError::Parse { path, source })
    }

    /// Loads the optional config file, then applies environment overrides.
    pub fn load(filepath: Option<&str>) -> Result<Self, AppConfigError> {
        let config = match filepath {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(env::var(DATA_DIR_ENV).ok(), env::var(REPORT_DIR_ENV).ok()))
    }

    fn with_overrides(mut self, data_dir: Option<String>, report_dir: Option<String>) -> Self {
        if let Some(dir) = data_dir.filter(|dir| !dir.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = report_dir.filter(|dir| !dir.is_empty()) {
            self.report_dir = PathBuf::from(dir);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = assert_fs::NamedTempFile::new("roi.yaml").unwrap();
        file.write_str("data_dir: /var/lib/roi\n").unwrap();

        let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/roi"));
        assert_eq!(config.report_dir, PathBuf::from("reports"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = assert_fs::NamedTempFile::new("roi.yaml").unwrap();
        file.write_str("mongo_url: localhost\n").unwrap();

        let err = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = AppConfig::from_yaml_file("/nonexistent/roi.yaml").unwrap_err();
        assert!(matches!(err, AppConfigError::Read { .. }));
    }

    #[test]
    fn overrides_replace_non_empty_values_only() {
        let config = AppConfig::default()
            .with_overrides(Some("/tmp/data".to_string()), Some(String::new()));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.report_dir, PathBuf::from("reports"));
    }
}
