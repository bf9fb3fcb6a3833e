use core::str::FromStr;
use serde::{Deserialize, Serialize};

use theater_core::DomainError;

/// Genre of a play; selects the pricing and volume-credit formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    pub const ALL: [Genre; 2] = [Genre::Tragedy, Genre::Comedy];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    /// Matching is exact: `"Tragedy"` is not a known genre.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(DomainError::unknown_play_type(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_genres() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn unknown_genre_carries_the_offending_string() {
        let err = "history".parse::<Genre>().unwrap_err();
        assert_eq!(err, DomainError::UnknownPlayType("history".to_string()));

        let err = "Comedy".parse::<Genre>().unwrap_err();
        assert_eq!(err, DomainError::UnknownPlayType("Comedy".to_string()));
    }
}
