//! Module: key::path
//! Responsibility: field locators and key-path declarations.
//! Does not own: value lookup (see `key::resolve`).
//! Boundary: key paths come from index definitions and are immutable input.

use crate::error::InternalError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

const SEGMENT_SEPARATOR: char = '.';

///
/// KeyPathError
///
/// Errors returned when declaring a field locator or key path.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyPathError {
    #[error("key path must name at least one field")]
    Empty,

    #[error("field locator '{locator}' contains an empty segment")]
    EmptySegment { locator: String },

    #[error("compound key path needs at least 2 fields, got {arity}")]
    CompoundArity { arity: usize },
}

impl From<KeyPathError> for InternalError {
    fn from(err: KeyPathError) -> Self {
        Self::key_path_invariant(err.to_string())
    }
}

///
/// FieldLocator
///
/// Dotted property path into a record (`"a.b.c"`).
/// The empty locator addresses the record itself.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldLocator(String);

impl FieldLocator {
    /// The locator that resolves to the whole record.
    pub const ROOT: Self = Self(String::new());

    pub fn new(locator: impl Into<String>) -> Result<Self, KeyPathError> {
        let locator = locator.into();

        if !locator.is_empty() && locator.split(SEGMENT_SEPARATOR).any(str::is_empty) {
            return Err(KeyPathError::EmptySegment { locator });
        }

        Ok(Self(locator))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Property names walked from the record root, outermost first.
    /// Yields nothing for the root locator.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let root = self.is_root();

        self.0.split(SEGMENT_SEPARATOR).filter(move |_| !root)
    }
}

impl fmt::Display for FieldLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldLocator {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FieldLocator {
    type Error = KeyPathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for FieldLocator {
    type Error = KeyPathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FieldLocator> for String {
    fn from(locator: FieldLocator) -> Self {
        locator.0
    }
}

///
/// KeyShape
///
/// The key form a key path expects.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyShape {
    Simple,
    Compound { arity: usize },
}

impl fmt::Display for KeyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple key"),
            Self::Compound { arity } => write!(f, "compound key of arity {arity}"),
        }
    }
}

///
/// KeyPath
///
/// Declaration of which record field(s) make up an index key.
/// Compound paths always carry two or more locators; their order is the
/// component order of every key derived from them.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeyPathRepr", into = "KeyPathRepr")]
pub enum KeyPath {
    Simple(FieldLocator),
    Compound(Vec<FieldLocator>),
}

impl KeyPath {
    pub fn simple(locator: &str) -> Result<Self, KeyPathError> {
        Ok(Self::Simple(FieldLocator::new(locator)?))
    }

    pub fn compound<I, S>(locators: I) -> Result<Self, KeyPathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locators = parse_locators(locators)?;
        if locators.len() < 2 {
            return Err(KeyPathError::CompoundArity {
                arity: locators.len(),
            });
        }

        Ok(Self::Compound(locators))
    }

    /// Build a simple path from one locator and a compound path from several.
    pub fn from_locators<I, S>(locators: I) -> Result<Self, KeyPathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut locators = parse_locators(locators)?;

        match locators.len() {
            0 => Err(KeyPathError::Empty),
            1 => Ok(Self::Simple(locators.remove(0))),
            _ => Ok(Self::Compound(locators)),
        }
    }

    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::Compound(_))
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Simple(_) => 1,
            Self::Compound(locators) => locators.len(),
        }
    }

    #[must_use]
    pub const fn shape(&self) -> KeyShape {
        match self {
            Self::Simple(_) => KeyShape::Simple,
            Self::Compound(locators) => KeyShape::Compound {
                arity: locators.len(),
            },
        }
    }

    /// Locators in key-component order (a singleton for simple paths).
    #[must_use]
    pub fn locators(&self) -> &[FieldLocator] {
        match self {
            Self::Simple(locator) => std::slice::from_ref(locator),
            Self::Compound(locators) => locators,
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(locator) => write!(f, "{:?}", locator.as_str()),
            Self::Compound(locators) => {
                f.write_str("[")?;
                for (i, locator) in locators.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", locator.as_str())?;
                }
                f.write_str("]")
            }
        }
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::simple(s)
    }
}

fn parse_locators<I, S>(locators: I) -> Result<Vec<FieldLocator>, KeyPathError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    locators.into_iter().map(FieldLocator::new).collect()
}

///
/// KeyPathRepr
///
/// Serialized form of a key path: a string or an array of strings.
///

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum KeyPathRepr {
    Simple(String),
    Compound(Vec<String>),
}

impl TryFrom<KeyPathRepr> for KeyPath {
    type Error = KeyPathError;

    fn try_from(repr: KeyPathRepr) -> Result<Self, Self::Error> {
        match repr {
            KeyPathRepr::Simple(locator) => Ok(Self::Simple(FieldLocator::new(locator)?)),
            KeyPathRepr::Compound(locators) => Self::from_locators(locators),
        }
    }
}

impl From<KeyPath> for KeyPathRepr {
    fn from(path: KeyPath) -> Self {
        match path {
            KeyPath::Simple(locator) => Self::Simple(locator.into()),
            KeyPath::Compound(locators) => {
                Self::Compound(locators.into_iter().map(Into::into).collect())
            }
        }
    }
}
