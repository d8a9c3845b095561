//! Radiance view projection types (`-vt`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

/// The camera model used by a view.
///
/// Each variant maps to the single character Radiance expects after `-vt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewType {
    /// Perspective (`v`).
    #[default]
    Perspective,
    /// Hemispherical fisheye (`h`).
    Hemispherical,
    /// Parallel (`l`).
    Parallel,
    /// Cylindrical panorama (`c`).
    Cylindrical,
    /// Angular fisheye (`a`).
    Angular,
    /// Planisphere, stereographic projection (`s`).
    Planisphere,
}

impl ViewType {
    /// All view types in Radiance's numbering order.
    pub const ALL: [ViewType; 6] = [
        ViewType::Perspective,
        ViewType::Hemispherical,
        ViewType::Parallel,
        ViewType::Cylindrical,
        ViewType::Angular,
        ViewType::Planisphere,
    ];

    /// Returns the Radiance type code.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            ViewType::Perspective => 'v',
            ViewType::Hemispherical => 'h',
            ViewType::Parallel => 'l',
            ViewType::Cylindrical => 'c',
            ViewType::Angular => 'a',
            ViewType::Planisphere => 's',
        }
    }

    /// Looks up a view type by its Radiance code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Parses a type from either its bare code (`v`) or the full flag (`vtv`).
    ///
    /// Only the last character is significant.
    pub fn parse_code(value: &str) -> Result<Self> {
        value
            .chars()
            .last()
            .and_then(Self::from_code)
            .ok_or_else(|| {
                ViewError::validation(format!(
                    "'{value}' is not a valid view type; expected one of v, h, l, c, a, s"
                ))
            })
    }

    /// Returns whether this is one of the fisheye projections.
    #[must_use]
    pub fn is_fisheye(self) -> bool {
        matches!(
            self,
            ViewType::Hemispherical | ViewType::Angular | ViewType::Planisphere
        )
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ViewType::Perspective => "perspective",
            ViewType::Hemispherical => "hemispherical fisheye",
            ViewType::Parallel => "parallel",
            ViewType::Cylindrical => "cylindrical panorama",
            ViewType::Angular => "angular fisheye",
            ViewType::Planisphere => "planisphere",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ViewType {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_code(s)
    }
}

impl TryFrom<String> for ViewType {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_code(&value)
    }
}

impl From<ViewType> for String {
    fn from(value: ViewType) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for t in ViewType::ALL {
            assert_eq!(ViewType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_parse_full_flag() {
        assert_eq!(ViewType::parse_code("vtv").unwrap(), ViewType::Perspective);
        assert_eq!(ViewType::parse_code("h").unwrap(), ViewType::Hemispherical);
        assert_eq!(ViewType::parse_code("vtl").unwrap(), ViewType::Parallel);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ViewType::parse_code("").is_err());
        assert!(ViewType::parse_code("vtx").is_err());
    }

    #[test]
    fn test_fisheye_variants() {
        let fisheyes: Vec<_> = ViewType::ALL.into_iter().filter(|t| t.is_fisheye()).collect();
        assert_eq!(
            fisheyes,
            vec![ViewType::Hemispherical, ViewType::Angular, ViewType::Planisphere]
        );
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&ViewType::Angular).unwrap();
        assert_eq!(json, "\"a\"");
        let back: ViewType = serde_json::from_str("\"vtc\"").unwrap();
        assert_eq!(back, ViewType::Cylindrical);
    }
}
