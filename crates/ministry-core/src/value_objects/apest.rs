//! APEST ministry-aptitude framework
//!
//! Five dimensions, always enumerated in the declared order:
//! apostolic, prophetic, evangelistic, shepherding, teaching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the five APEST dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApestDimension {
    Apostolic,
    Prophetic,
    Evangelistic,
    Shepherding,
    Teaching,
}

impl ApestDimension {
    /// All dimensions in declared order.
    pub const ALL: [Self; 5] = [
        Self::Apostolic,
        Self::Prophetic,
        Self::Evangelistic,
        Self::Shepherding,
        Self::Teaching,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apostolic => "apostolic",
            Self::Prophetic => "prophetic",
            Self::Evangelistic => "evangelistic",
            Self::Shepherding => "shepherding",
            Self::Teaching => "teaching",
        }
    }

    /// Capitalized name for display
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Apostolic => "Apostolic",
            Self::Prophetic => "Prophetic",
            Self::Evangelistic => "Evangelistic",
            Self::Shepherding => "Shepherding",
            Self::Teaching => "Teaching",
        }
    }
}

impl fmt::Display for ApestDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApestDimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == s)
            .ok_or_else(|| DomainError::UnknownApestDimension(s.to_string()))
    }
}

/// A score per APEST dimension.
///
/// Used both for relevance ratings (1-10 scale) and assessment results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApestScores {
    pub apostolic: i32,
    pub prophetic: i32,
    pub evangelistic: i32,
    pub shepherding: i32,
    pub teaching: i32,
}

impl ApestScores {
    /// Relevance applied when a category or concept has none recorded.
    pub const NEUTRAL_RELEVANCE: Self = Self::uniform(5);

    /// Every dimension set to the same score
    #[must_use]
    pub const fn uniform(score: i32) -> Self {
        Self {
            apostolic: score,
            prophetic: score,
            evangelistic: score,
            shepherding: score,
            teaching: score,
        }
    }

    #[must_use]
    pub const fn get(&self, dimension: ApestDimension) -> i32 {
        match dimension {
            ApestDimension::Apostolic => self.apostolic,
            ApestDimension::Prophetic => self.prophetic,
            ApestDimension::Evangelistic => self.evangelistic,
            ApestDimension::Shepherding => self.shepherding,
            ApestDimension::Teaching => self.teaching,
        }
    }

    /// Iterate `(dimension, score)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (ApestDimension, i32)> + '_ {
        ApestDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    /// The dimension with the highest score.
    ///
    /// Ties resolve to the first maximum in declared order.
    #[must_use]
    pub fn primary_dimension(&self) -> ApestDimension {
        let mut best = (ApestDimension::Apostolic, self.apostolic);
        for (dimension, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (dimension, score);
            }
        }
        best.0
    }
}
