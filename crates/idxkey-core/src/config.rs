//! Module: config
//! Responsibility: codec options loaded from TOML or built in code.
//! Does not own: encoding itself (see `codec`).

use crate::error::InternalError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Two-character sequence placed between the components of a compound key.
/// U+0000 sorts below every other character, so a component that is a
/// prefix of another sorts first.
pub const DEFAULT_JOINER: &str = "\u{0}\u{0}";

/// Required first character of every joiner.
pub const JOINER_LEAD: char = '\u{0}';

/// Marker appended after an escaped joiner character inside text content.
pub const ESCAPE_MARKER: char = '\u{ff}';

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse codec config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("joiner must be exactly 2 characters, got {len}")]
    InvalidJoiner { len: usize },

    #[error("joiner must start with U+0000 so component boundaries sort first, got {ch:?}")]
    JoinerLeadNotLowest { ch: char },

    #[error("escaped joins need a joiner whose second character sorts below the escape marker U+00FF")]
    JoinerCollidesWithEscape,
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

///
/// NonFinitePolicy
///
/// How zero, NaN, and the infinities are written.
///
/// `Text` writes their plain text form (`0`, `NaN`, `Infinity`,
/// `-Infinity`). That places zero, `Infinity`, and `NaN` correctly but sorts
/// `-Infinity` after every negative finite number.
///
/// `Ordered` writes `-Infinity` as `--Infinity`, giving the total order
/// `-Infinity < negatives < 0 < positives < Infinity < NaN`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    #[default]
    Text,
    Ordered,
}

///
/// ComponentJoin
///
/// How text components are written inside compound keys.
///
/// `Bare` writes raw text, so text containing the joiner can collide with a
/// component boundary. `Escaped` follows every occurrence of the joiner's
/// first character in text content with `ESCAPE_MARKER`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentJoin {
    #[default]
    Bare,
    Escaped,
}

///
/// KeyCodecConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyCodecConfig {
    pub joiner: String,
    pub component_join: ComponentJoin,
    pub non_finite: NonFinitePolicy,
}

impl Default for KeyCodecConfig {
    fn default() -> Self {
        Self {
            joiner: DEFAULT_JOINER.to_string(),
            component_join: ComponentJoin::default(),
            non_finite: NonFinitePolicy::default(),
        }
    }
}

impl KeyCodecConfig {
    /// Parse and validate a TOML document; omitted fields take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    /// Check that compound encodings stay ordered component by component.
    ///
    /// The joiner must be two characters starting with U+0000, so a
    /// boundary sorts below any character that can continue a component.
    /// Escaped joins also need the second character below `ESCAPE_MARKER`,
    /// so a boundary sorts below an escaped U+0000 in text content.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.joiner.chars();
        let (Some(lead), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ConfigError::InvalidJoiner {
                len: self.joiner.chars().count(),
            });
        };

        if lead != JOINER_LEAD {
            return Err(ConfigError::JoinerLeadNotLowest { ch: lead });
        }

        if self.component_join == ComponentJoin::Escaped && second >= ESCAPE_MARKER {
            return Err(ConfigError::JoinerCollidesWithEscape);
        }

        Ok(())
    }

    #[must_use]
    pub fn with_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.joiner = joiner.into();
        self
    }

    #[must_use]
    pub const fn with_component_join(mut self, component_join: ComponentJoin) -> Self {
        self.component_join = component_join;
        self
    }

    #[must_use]
    pub const fn with_non_finite(mut self, non_finite: NonFinitePolicy) -> Self {
        self.non_finite = non_finite;
        self
    }

    /// First character of the joiner; the one escaped inside text content.
    pub(crate) fn joiner_lead(&self) -> Option<char> {
        self.joiner.chars().next()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = KeyCodecConfig::from_toml_str("").expect("empty config should parse");

        assert_eq!(config, KeyCodecConfig::default());
        assert_eq!(config.joiner, DEFAULT_JOINER);
    }

    #[test]
    fn policies_parse_from_snake_case() {
        let config = KeyCodecConfig::from_toml_str(
            r#"
            joiner = "\u0000\u0001"
            component_join = "escaped"
            non_finite = "ordered"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.joiner, "\u{0}\u{1}");
        assert_eq!(config.component_join, ComponentJoin::Escaped);
        assert_eq!(config.non_finite, NonFinitePolicy::Ordered);
    }

    #[test]
    fn joiner_must_be_two_characters() {
        let err = KeyCodecConfig::from_toml_str(r#"joiner = "|""#).expect_err("short joiner");
        assert!(matches!(err, ConfigError::InvalidJoiner { len: 1 }));

        let err = KeyCodecConfig::default()
            .with_joiner("abc")
            .validate()
            .expect_err("long joiner");
        assert!(matches!(err, ConfigError::InvalidJoiner { len: 3 }));
    }

    #[test]
    fn escaped_join_needs_second_character_below_marker() {
        for joiner in ["\u{0}\u{ff}", "\u{0}\u{100}", "\u{0}\u{10ffff}"] {
            let err = KeyCodecConfig::default()
                .with_joiner(joiner)
                .with_component_join(ComponentJoin::Escaped)
                .validate()
                .expect_err("joiner does not sort below escaped content");

            assert!(matches!(err, ConfigError::JoinerCollidesWithEscape));
        }

        // bare joins never escape, so any second character is fine
        KeyCodecConfig::default()
            .with_joiner("\u{0}\u{ff}")
            .validate()
            .expect("bare join accepts a high second character");
    }

    #[test]
    fn joiner_must_start_with_nul() {
        for (joiner, lead) in [("||", '|'), ("--", '-'), ("A\u{0}", 'A'), ("\u{1}\u{0}", '\u{1}')] {
            let err = KeyCodecConfig::default()
                .with_joiner(joiner)
                .validate()
                .expect_err("joiner lead sorts above component content");

            assert!(matches!(err, ConfigError::JoinerLeadNotLowest { ch } if ch == lead));
        }

        KeyCodecConfig::default()
            .with_joiner("\u{0}|")
            .validate()
            .expect("nul-led joiner");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = KeyCodecConfig::from_toml_str("separator = \"::\"").expect_err("unknown field");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn config_errors_classify_as_config() {
        let err: InternalError = ConfigError::InvalidJoiner { len: 0 }.into();
        assert_eq!(err.class, crate::error::ErrorClass::Config);
        assert_eq!(err.origin, crate::error::ErrorOrigin::Config);
    }
}
