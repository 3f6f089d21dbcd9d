//! Parse options.

use super::ParseError;

/// The options for strict parsing.
///
/// The default options reject both unknown directives and invalid values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Skip unknown directives instead of failing.
    ///
    /// If `CACHE_CONTROL_IGNORE_UNKNOWN_DIRECTIVES` is set in the environment, it will be read
    /// when calling `ParseOptions::from_env`.
    pub ignore_unknown_directives: bool,

    /// Skip directives with invalid values (e.g. `max-age=invalid` or `max-stale=1s`) instead of
    /// failing.
    ///
    /// If `CACHE_CONTROL_IGNORE_INVALID_VALUES` is set in the environment, it will be read when
    /// calling `ParseOptions::from_env`.
    pub ignore_invalid_values: bool,
}

/// An error that can occur when trying to get the parse options from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ParseOptionsFromEnvError {
    /// An environment variable was not unicode.
    #[error("environment variable {name} was not unicode")]
    NotUnicode {
        /// The name of the environment variable.
        name: &'static str,
    },

    /// An environment variable did not hold a boolean.
    #[error("failed to parse a boolean from environment variable {name} (was `{value}`)")]
    InvalidBool {
        /// The name of the environment variable.
        name: &'static str,

        /// The value that was attempted to be parsed.
        value: String,
    },
}

impl ParseOptions {
    /// The environment variable name for [`ParseOptions::ignore_unknown_directives`].
    pub const CACHE_CONTROL_IGNORE_UNKNOWN_DIRECTIVES: &'static str =
        "CACHE_CONTROL_IGNORE_UNKNOWN_DIRECTIVES";

    /// The environment variable name for [`ParseOptions::ignore_invalid_values`].
    pub const CACHE_CONTROL_IGNORE_INVALID_VALUES: &'static str =
        "CACHE_CONTROL_IGNORE_INVALID_VALUES";

    /// Options that ignore everything, which makes strict parsing behave like lenient parsing.
    pub fn lenient() -> Self {
        Self {
            ignore_unknown_directives: true,
            ignore_invalid_values: true,
        }
    }

    /// Set whether unknown directives are skipped.
    pub fn with_ignore_unknown_directives(mut self, ignore_unknown_directives: bool) -> Self {
        self.ignore_unknown_directives = ignore_unknown_directives;
        self
    }

    /// Set whether directives with invalid values are skipped.
    pub fn with_ignore_invalid_values(mut self, ignore_invalid_values: bool) -> Self {
        self.ignore_invalid_values = ignore_invalid_values;
        self
    }

    /// Whether the given error is skipped under these options.
    pub(crate) fn ignores(&self, err: &ParseError) -> bool {
        match err {
            ParseError::UnknownDirective { .. } => self.ignore_unknown_directives,
            ParseError::InvalidDirectiveValue { .. } => self.ignore_invalid_values,
        }
    }

    fn env_var(name: &'static str) -> Result<Option<String>, ParseOptionsFromEnvError> {
        match std::env::var(name) {
            Ok(value) => Ok(if value.is_empty() { None } else { Some(value) }),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ParseOptionsFromEnvError::NotUnicode { name })
            }
        }
    }

    /// Get the parse options from the environment.
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, ParseOptionsFromEnvError> {
        tracing::info!("Reading Cache-Control parse options from the environment...");

        Self::from_vars(Self::env_var)
    }

    fn from_vars(
        var: impl Fn(&'static str) -> Result<Option<String>, ParseOptionsFromEnvError>,
    ) -> Result<Self, ParseOptionsFromEnvError> {
        let flag = |name: &'static str| -> Result<bool, ParseOptionsFromEnvError> {
            let Some(value) = var(name)? else {
                tracing::info!("{name} was not set: using the default (`false`).");

                return Ok(false);
            };

            let flag = parse_bool(&value)
                .ok_or(ParseOptionsFromEnvError::InvalidBool { name, value })?;

            if flag {
                tracing::warn!(
                    "{name} was set: matching Cache-Control directives will be dropped silently."
                );
            } else {
                tracing::info!("{name} was set to `false`.");
            }

            Ok(flag)
        };

        Ok(Self {
            ignore_unknown_directives: flag(Self::CACHE_CONTROL_IGNORE_UNKNOWN_DIRECTIVES)?,
            ignore_invalid_values: flag(Self::CACHE_CONTROL_IGNORE_INVALID_VALUES)?,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
