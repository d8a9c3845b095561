//! Radiance command-line options.
//!
//! Radiance programs take parameters as `-<flag> <value...>` tokens. Some
//! flags carry their value glued to the name (`-vtv`), others take one number
//! (`-vh 60`) or a triple (`-vp 0 0 0`). This module renders those forms and
//! splits a parameter string back into flags and their values.

use std::fmt;

use glam::DVec3;

use crate::error::{Result, ViewError};

/// The value carried by a Radiance option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Value appended directly to the flag, as in `-vtv`.
    Joined(String),
    /// A single number. `None` renders nothing.
    Numeric(Option<f64>),
    /// Three numbers.
    Tuple(DVec3),
}

/// A named option ready to be rendered in Radiance syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct RadianceOption {
    flag: &'static str,
    value: OptionValue,
}

impl RadianceOption {
    /// Creates an option with a value joined to the flag.
    pub fn joined(flag: &'static str, value: impl fmt::Display) -> Self {
        Self {
            flag,
            value: OptionValue::Joined(value.to_string()),
        }
    }

    /// Creates a numeric option. Unset values render as an empty string.
    pub fn numeric(flag: &'static str, value: Option<f64>) -> Self {
        Self {
            flag,
            value: OptionValue::Numeric(value),
        }
    }

    /// Creates a three-component option.
    pub fn tuple(flag: &'static str, value: DVec3) -> Self {
        Self {
            flag,
            value: OptionValue::Tuple(value),
        }
    }
}

impl fmt::Display for RadianceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            OptionValue::Joined(value) => write!(f, "-{}{value}", self.flag),
            OptionValue::Numeric(None) => Ok(()),
            OptionValue::Numeric(Some(value)) => write!(f, "-{} {value}", self.flag),
            OptionValue::Tuple(v) => write!(f, "-{} {} {} {}", self.flag, v.x, v.y, v.z),
        }
    }
}

/// Joins rendered options with single spaces, dropping empty ones.
pub fn join_options<'a>(options: impl IntoIterator<Item = &'a RadianceOption>) -> String {
    let joined = options
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A flag and the raw value tokens that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    /// Flag name without the leading dash.
    pub name: String,
    /// Tokens up to the next flag.
    pub values: Vec<String>,
}

impl ParsedOption {
    /// Reads the option as exactly one number.
    pub fn as_f64(&self) -> Result<f64> {
        match self.values.as_slice() {
            [value] => parse_number(&self.name, value),
            other => Err(ViewError::format(format!(
                "-{} expects 1 value, got {}",
                self.name,
                other.len()
            ))),
        }
    }

    /// Reads the option as exactly three numbers.
    pub fn as_vec3(&self) -> Result<DVec3> {
        match self.values.as_slice() {
            [x, y, z] => Ok(DVec3::new(
                parse_number(&self.name, x)?,
                parse_number(&self.name, y)?,
                parse_number(&self.name, z)?,
            )),
            other => Err(ViewError::format(format!(
                "-{} expects 3 values, got {}",
                self.name,
                other.len()
            ))),
        }
    }
}

fn parse_number(flag: &str, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ViewError::format(format!("-{flag}: '{token}' is not a number")))
}

/// Returns whether a token starts a new option rather than being a value.
///
/// Negative numbers such as `-0.5` or `-inf` are values.
fn is_flag(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-')
        && chars.next().is_some_and(char::is_alphabetic)
        && token.parse::<f64>().is_err()
}

/// Splits a Radiance parameter string into options, in order of appearance.
///
/// Tokens before the first flag (a program name such as `rvu`) are skipped.
pub fn parse_options(text: &str) -> Vec<ParsedOption> {
    let mut options: Vec<ParsedOption> = Vec::new();
    for token in text.split_whitespace() {
        if is_flag(token) {
            options.push(ParsedOption {
                name: token[1..].to_string(),
                values: Vec::new(),
            });
        } else if let Some(current) = options.last_mut() {
            current.values.push(token.to_string());
        }
    }
    options
}
