use super::types::{Color, TextWeight};
use crate::error::{FResult, FontaineError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub const DEFAULT_THRESHOLDS: [f64; 4] = [0.30, 0.50, 0.70, 0.90];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RatingBucket {
    Terrible,
    Bad,
    Decent,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketStyle {
    pub text_color: Color,
    pub background_color: Color,
    pub tooltip_color: Option<Color>,
    pub tooltip_weight: TextWeight,
}

impl RatingBucket {
    /// Capitalised label, e.g. "Excellent".
    pub fn label(self) -> &'static str {
        match self {
            Self::Terrible => "Terrible",
            Self::Bad => "Bad",
            Self::Decent => "Decent",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Terrible => "🤢",
            Self::Bad => "😴",
            Self::Decent => "🤔",
            Self::Good => "😀",
            Self::Excellent => "😍",
        }
    }

    pub fn style(self) -> BucketStyle {
        use Color::*;
        let (text_color, background_color, tooltip_color, tooltip_weight) = match self {
            Self::Terrible => (White, Red600, Red700, TextWeight::Bold),
            Self::Bad => (Red700, Red200, Red700, TextWeight::Normal),
            Self::Decent => (Black, Transparent, Black, TextWeight::Normal),
            Self::Good => (Green700, Green200, Green700, TextWeight::Normal),
            Self::Excellent => (White, Green600, Green700, TextWeight::Bold),
        };
        BucketStyle {
            text_color,
            background_color,
            tooltip_color: Some(tooltip_color),
            tooltip_weight,
        }
    }

    /// Contribution of one artifact in this bucket to a character's vote.
    pub fn vote(self) -> i32 {
        match self {
            Self::Terrible => -2,
            Self::Bad => -1,
            Self::Decent => 0,
            Self::Good => 1,
            Self::Excellent => 2,
        }
    }
}

/// Four ascending cut points splitting [0, 1] into five buckets. Intervals
/// are closed on the left: a score equal to a threshold lands in the
/// higher bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScale {
    thresholds: [f64; 4],
}

impl RatingScale {
    pub fn new(thresholds: [f64; 4]) -> FResult<Self> {
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(FontaineError::Config(format!(
                "Rating thresholds must be finite, got {:?}",
                thresholds
            )));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FontaineError::Config(format!(
                "Rating thresholds must be strictly ascending, got {:?}",
                thresholds
            )));
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> [f64; 4] {
        self.thresholds
    }

    pub fn classify(&self, score: f64) -> RatingBucket {
        let [t0, t1, t2, t3] = self.thresholds;
        if score < t0 {
            RatingBucket::Terrible
        } else if score < t1 {
            RatingBucket::Bad
        } else if score < t2 {
            RatingBucket::Decent
        } else if score < t3 {
            RatingBucket::Good
        } else {
            RatingBucket::Excellent
        }
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}
