//! Core domain types for the portfolio content.
//!
//! Every record here is immutable for the lifetime of a session: the store
//! hands out references and downstream code only selects and reorders
//! them. Ids are plain strings, unique within their document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Proficiency level for a skill.
///
/// Variant order defines the rank ordering used for filtering and
/// sorting: `Intermediate < Advanced < Expert`. The string tokens are
/// shared by serde and the URL codec, so they must stay stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// All levels in ascending rank order, for flag help and UI chips.
    pub const ALL: [Proficiency; 3] = [
        Proficiency::Intermediate,
        Proficiency::Advanced,
        Proficiency::Expert,
    ];

    /// Stable wire token for this level.
    pub fn token(self) -> &'static str {
        match self {
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returned by [`Proficiency::from_str`] for tokens outside the fixed set.
#[derive(Debug, Error)]
#[error("unrecognized proficiency token: {0:?}")]
pub struct UnknownProficiency(pub String);

impl FromStr for Proficiency {
    type Err = UnknownProficiency;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "intermediate" => Ok(Proficiency::Intermediate),
            "advanced" => Ok(Proficiency::Advanced),
            "expert" => Ok(Proficiency::Expert),
            other => Err(UnknownProficiency(other.to_string())),
        }
    }
}

/// One entry in the skills section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Category tags, e.g. "backend", "languages". One skill can carry
    /// several.
    pub tags: Vec<String>,
    pub proficiency: Proficiency,
    /// Years of hands-on experience; tie-break key under rank sorting.
    pub years: f32,
}

/// One entry in the photo gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub view_count: u32,
    pub location: String,
}

/// One blog post. The body is markdown, rendered elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    /// Unix timestamp of publication; sort key for "newest first".
    pub published: i64,
    pub body: String,
}

/// Optional extra display data for an item, keyed by item id in the
/// store's side-table. Most items have no entry; that is the normal case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub headline: String,
    /// Short evidence lines shown when the item is expanded.
    pub evidence: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_ordering() {
        assert!(Proficiency::Intermediate < Proficiency::Advanced);
        assert!(Proficiency::Advanced < Proficiency::Expert);
    }

    #[test]
    fn test_proficiency_token_round_trip() {
        for level in Proficiency::ALL {
            assert_eq!(level.token().parse::<Proficiency>().unwrap(), level);
        }
    }

    #[test]
    fn test_proficiency_unknown_token() {
        assert!("guru".parse::<Proficiency>().is_err());
        assert!("Expert".parse::<Proficiency>().is_err());
    }

    #[test]
    fn test_proficiency_serde_tokens_match() {
        let json = serde_json::to_string(&Proficiency::Expert).unwrap();
        assert_eq!(json, "\"expert\"");
        let back: Proficiency = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(back, Proficiency::Advanced);
    }
}
