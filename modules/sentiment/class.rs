use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Five-way sentiment label carrying an integer in `[-2, 2]`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentClass {
    /// -2
    VeryNegative,
    /// -1
    Negative,
    /// 0
    #[default]
    Neutral,
    /// 1
    Positive,
    /// 2
    VeryPositive,
}

impl SentimentClass {
    /// Every label in ascending order of value.
    pub const ALL: [Self; 5] = [
        Self::VeryNegative,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
        Self::VeryPositive,
    ];

    /// Integer payload of the label.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::VeryNegative => -2,
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
            Self::VeryPositive => 2,
        }
    }

    /// Reverse lookup of [`SentimentClass::value`]. `None` outside `[-2, 2]`.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            -2 => Some(Self::VeryNegative),
            -1 => Some(Self::Negative),
            0 => Some(Self::Neutral),
            1 => Some(Self::Positive),
            2 => Some(Self::VeryPositive),
            _ => None,
        }
    }

    /// Maps a raw five-class model index (0 = very negative .. 4 = very positive).
    ///
    /// Anything unrecognised falls back to [`SentimentClass::Neutral`].
    #[must_use]
    pub const fn from_predicted_class(index: usize) -> Self {
        match index {
            0 => Self::VeryNegative,
            1 => Self::Negative,
            3 => Self::Positive,
            4 => Self::VeryPositive,
            _ => Self::Neutral,
        }
    }

    /// Canonical upper-snake label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryNegative => "VERY_NEGATIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Positive => "POSITIVE",
            Self::VeryPositive => "VERY_POSITIVE",
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no sentiment label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sentiment label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentClass {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
