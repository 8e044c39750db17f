//! Application configuration loaded from `staffdb.toml`.
//!
//! # Responsibility
//! - Locate and parse the optional TOML configuration file.
//! - Hold the fixed parameters of every menu operation with their defaults.
//!
//! # Invariants
//! - A missing file is not an error; defaults apply.
//! - Unknown keys are rejected so typos do not silently fall back.

use crate::logging::default_log_level;
use crate::model::decimal::Decimal;
use crate::model::entities::DepartmentId;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "staffdb.toml";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    InvalidValue(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidValue(message) => write!(f, "invalid config value: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidValue(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub exercises: ExerciseSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite database file holding the staff schema.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("staffdb.sqlite3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`
    pub level: String,
    /// Absolute directory for rolling log files.
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: std::env::temp_dir().join("staffdb-logs"),
        }
    }
}

/// Fixed inputs of the menu operations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExerciseSettings {
    /// Towns whose name has at most this many characters get uppercased.
    pub short_town_name_len: u32,
    /// Salary floor (exclusive) for the first-name projection.
    pub salary_floor: Decimal,
    /// Department listed by salary then id.
    pub department_name: String,
    /// Text of the address created for the relocated employee.
    pub new_address_text: String,
    /// How many addresses the occupancy ranking prints.
    pub top_address_limit: u32,
    /// Departments whose salaries are raised.
    pub raise_department_ids: Vec<DepartmentId>,
    /// Multiplier applied by the raise.
    pub raise_factor: Decimal,
    /// Lower bound of the accepted max-salary range.
    pub max_salary_low: Decimal,
    /// Upper bound of the accepted max-salary range.
    pub max_salary_high: Decimal,
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self {
            short_town_name_len: 5,
            salary_floor: Decimal::from_whole(50_000),
            department_name: "Research and Development".to_string(),
            new_address_text: "Vitoshka 15".to_string(),
            top_address_limit: 10,
            raise_department_ids: vec![1, 2, 4, 11],
            raise_factor: Decimal::from_units(12_000),
            max_salary_low: Decimal::from_whole(30_000),
            max_salary_high: Decimal::from_whole(70_000),
        }
    }
}

impl AppConfig {
    /// Loads `staffdb.toml` from `dir`, or returns defaults when absent.
    pub fn load_or_default(dir: &Path) -> ConfigResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads and validates one configuration file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        let exercises = &self.exercises;
        if exercises.raise_factor <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue(format!(
                "exercises.raise_factor must be positive, got {}",
                exercises.raise_factor
            )));
        }
        if exercises.max_salary_low > exercises.max_salary_high {
            return Err(ConfigError::InvalidValue(format!(
                "exercises.max_salary_low {} exceeds max_salary_high {}",
                exercises.max_salary_low, exercises.max_salary_high
            )));
        }
        if exercises.salary_floor.is_negative() {
            return Err(ConfigError::InvalidValue(format!(
                "exercises.salary_floor must not be negative, got {}",
                exercises.salary_floor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, CONFIG_FILE_NAME};
    use crate::model::decimal::Decimal;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_menu_constants() {
        let config = AppConfig::default();
        let exercises = &config.exercises;
        assert_eq!(exercises.short_town_name_len, 5);
        assert_eq!(exercises.salary_floor, Decimal::from_whole(50_000));
        assert_eq!(exercises.department_name, "Research and Development");
        assert_eq!(exercises.new_address_text, "Vitoshka 15");
        assert_eq!(exercises.top_address_limit, 10);
        assert_eq!(exercises.raise_department_ids, vec![1, 2, 4, 11]);
        assert_eq!(exercises.raise_factor.to_string(), "1.2");
        assert_eq!(config.database.path, PathBuf::from("staffdb.sqlite3"));
        assert!(config.logging.dir.is_absolute());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = AppConfig::from_toml_str(
            r#"
            [database]
            path = "/var/lib/staff.db"

            [exercises]
            raise_factor = "1.05"
            raise_department_ids = [3]
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.database.path, PathBuf::from("/var/lib/staff.db"));
        assert_eq!(config.exercises.raise_factor, Decimal::from_units(10_500));
        assert_eq!(config.exercises.raise_department_ids, vec![3]);
        assert_eq!(config.exercises.top_address_limit, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("[database]\nfile = \"x.db\"\n")
            .expect_err("unknown key should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_factor_is_rejected() {
        let err = AppConfig::from_toml_str("[exercises]\nraise_factor = \"0\"\n")
            .expect_err("zero factor should fail");
        assert!(matches!(err, ConfigError::InvalidValue(message) if message.contains("raise_factor")));
    }

    #[test]
    fn inverted_salary_range_is_rejected() {
        let err = AppConfig::from_toml_str(
            "[exercises]\nmax_salary_low = \"80000\"\nmax_salary_high = \"70000\"\n",
        )
        .expect_err("inverted range should fail");
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load_or_default(dir.path()).expect("defaults");
        assert_eq!(config, AppConfig::default());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[logging]\nlevel = \"warn\"\n",
        )
        .expect("write config");
        let config = AppConfig::load_or_default(dir.path()).expect("file config");
        assert_eq!(config.logging.level, "warn");
    }
}
