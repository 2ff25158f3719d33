//! Background selection model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Cosmetic background choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Plain white
    #[default]
    Plain,
    /// Warm paper texture
    Paper,
    /// Light grid
    Grid,
    /// Dotted pattern
    Dots,
    /// Orange gradient
    Sunrise,
    /// Blue gradient
    Ocean,
}

impl Background {
    /// Every known background, in picker order
    pub const ALL: [Self; 6] = [
        Self::Plain,
        Self::Paper,
        Self::Grid,
        Self::Dots,
        Self::Sunrise,
        Self::Ocean,
    ];

    /// Persisted identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Paper => "paper",
            Self::Grid => "grid",
            Self::Dots => "dots",
            Self::Sunrise => "sunrise",
            Self::Ocean => "ocean",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::Paper => "Paper",
            Self::Grid => "Grid",
            Self::Dots => "Dots",
            Self::Sunrise => "Sunrise",
            Self::Ocean => "Ocean",
        }
    }

    /// Resolve a stored value, falling back to the default for anything unknown
    #[must_use]
    pub fn resolve(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Background {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|bg| bg.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("unknown background '{}'", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_default() {
        assert_eq!(Background::default(), Background::Plain);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Ocean".parse::<Background>().unwrap(), Background::Ocean);
        assert_eq!(" dots ".parse::<Background>().unwrap(), Background::Dots);
        assert!("marble".parse::<Background>().is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Background::resolve(None), Background::Plain);
        assert_eq!(Background::resolve(Some("nope")), Background::Plain);
        assert_eq!(Background::resolve(Some("grid")), Background::Grid);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for bg in Background::ALL {
            assert_eq!(bg.as_str().parse::<Background>().unwrap(), bg);
            assert_eq!(
                serde_json::to_string(&bg).unwrap(),
                format!("\"{}\"", bg.as_str())
            );
        }
    }
}
