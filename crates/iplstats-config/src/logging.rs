use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Output formats the telemetry layer can emit.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Newline-delimited JSON for log aggregation.
    #[default]
    Json,
    /// Terse single-line output for interactive use.
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;
