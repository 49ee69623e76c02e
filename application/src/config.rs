//! [`Config`]-related definitions.

use std::path::PathBuf;

use common::datetime;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use serde::Deserialize;
use service::report;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Report configuration.
    #[serde(default)]
    pub report: Report,

    /// Prompt configuration.
    #[serde(default)]
    pub prompt: Prompt,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Report configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Report {
    /// Title printed in the report header.
    #[default("RENTAL QUOTE - R.M. Real Estate".to_owned())]
    pub title: String,

    /// Symbol printed before every amount.
    #[default("R$".to_owned())]
    pub currency_symbol: String,

    /// `±HH:MM` offset from UTC the report dates are printed at.
    #[default("+00:00".to_owned())]
    pub utc_offset: String,

    /// [`report::Template`] the saved reports are rendered with.
    pub saved_template: report::Template,

    /// Directory the reports are saved into.
    #[default(PathBuf::from("."))]
    pub output_dir: PathBuf,

    /// Prefix of the saved report file names.
    #[default("quote".to_owned())]
    pub file_prefix: String,
}

impl TryFrom<Report> for service::Config {
    type Error = InvalidUtcOffset;

    fn try_from(value: Report) -> Result<Self, Self::Error> {
        let Report {
            title,
            currency_symbol,
            utc_offset,
            saved_template,
            output_dir: _,
            file_prefix,
        } = value;

        let utc_offset = datetime::parse_utc_offset(&utc_offset)
            .map_err(|_| InvalidUtcOffset(utc_offset))?;

        Ok(Self {
            style: report::Style {
                title,
                currency_symbol,
                utc_offset,
            },
            saved_template,
            file_prefix,
        })
    }
}

/// Error of a malformed [`Report::utc_offset`].
#[derive(Clone, Debug, Display, Error)]
#[display("`{_0}` is not a `±HH:MM` offset from UTC")]
pub struct InvalidUtcOffset(#[error(not(source))] pub String);

/// Prompt configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Prompt {
    /// Answer prefixes meaning "yes" in yes/no questions.
    #[default(vec!["y".to_owned(), "s".to_owned()])]
    pub affirmative: Vec<String>,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
