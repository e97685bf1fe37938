//! Mood levels as the single source of truth for mood names and scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The fixed mood scale of the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Awful,
    Bad,
    Meh,
    Good,
    Rad,
}

impl Mood {
    /// All levels, worst first.
    pub const ALL: [Self; 5] = [Self::Awful, Self::Bad, Self::Meh, Self::Good, Self::Rad];

    /// Numeric score used by conditions and statistics.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Awful => 1.0,
            Self::Bad => 2.0,
            Self::Meh => 3.0,
            Self::Good => 4.0,
            Self::Rad => 5.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Awful => "awful",
            Self::Bad => "bad",
            Self::Meh => "meh",
            Self::Good => "good",
            Self::Rad => "rad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awful" => Ok(Self::Awful),
            "bad" => Ok(Self::Bad),
            "meh" => Ok(Self::Meh),
            "good" => Ok(Self::Good),
            "rad" => Ok(Self::Rad),
            _ => Err(Error::UnknownMood(s.to_string())),
        }
    }
}

impl Serialize for Mood {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back_to_levels() {
        for mood in Mood::ALL {
            let parsed: Mood = mood.to_string().parse().expect("should parse");
            assert_eq!(parsed, mood);
        }
    }

    #[test]
    fn scores_span_one_to_five() {
        let scores: Vec<f64> = Mood::ALL.iter().map(|m| m.score()).collect();
        assert_eq!(scores, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn unknown_mood_errors() {
        let err = "ecstatic".parse::<Mood>().unwrap_err();
        assert_eq!(err, Error::UnknownMood("ecstatic".to_string()));
        assert!(err.to_string().contains("ecstatic"));
    }

    #[test]
    fn serde_uses_level_names() {
        let json = serde_json::to_string(&Mood::Good).unwrap();
        assert_eq!(json, "\"good\"");
        let parsed: Mood = serde_json::from_str("\"rad\"").unwrap();
        assert_eq!(parsed, Mood::Rad);
        assert!(serde_json::from_str::<Mood>("\"great\"").is_err());
    }
}
