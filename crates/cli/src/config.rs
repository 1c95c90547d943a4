//! Environment-driven settings for the demo binary.

use passbook_account::StatementStyle;
use passbook_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "PASSBOOK_LOG_FORMAT";
pub const STATEMENT_STYLE_VAR: &str = "PASSBOOK_STATEMENT_STYLE";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    pub statement_style: StatementStyle,
}

/// Log format alone, read before the subscriber exists. Unknown values are
/// reported later by [`Config::from_env`].
pub fn log_format_from_env() -> LogFormat {
    std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|raw| LogFormat::parse(&raw))
        .unwrap_or_default()
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unknown values fall back to
    /// the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.log_format = format,
                None => tracing::warn!(
                    "{LOG_FORMAT_VAR}={raw:?} not recognised; using {:?}",
                    config.log_format
                ),
            }
        }

        if let Some(raw) = lookup(STATEMENT_STYLE_VAR) {
            match parse_statement_style(&raw) {
                Some(style) => config.statement_style = style,
                None => tracing::warn!(
                    "{STATEMENT_STYLE_VAR}={raw:?} not recognised; using {:?}",
                    config.statement_style
                ),
            }
        }

        config
    }
}

fn parse_statement_style(name: &str) -> Option<StatementStyle> {
    match name.trim().to_ascii_lowercase().as_str() {
        "aligned" => Some(StatementStyle::Aligned),
        "compact" => Some(StatementStyle::Compact),
        _ => None,
    }
}
