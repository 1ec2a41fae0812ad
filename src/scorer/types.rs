use crate::error::{FResult, FontaineError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter, EnumString};

/// Maximum number of substats an artifact can carry.
pub const MAX_SUBSTATS: usize = 4;

/// The five equip positions. Parses display names case-insensitively and the
/// provider's `EQUIP_*` codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
    Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Slot {
    #[strum(to_string = "Flower", serialize = "EQUIP_BRACER")]
    #[serde(alias = "flower", alias = "EQUIP_BRACER")]
    Flower,
    #[strum(to_string = "Feather", serialize = "EQUIP_NECKLACE")]
    #[serde(alias = "feather", alias = "EQUIP_NECKLACE")]
    Feather,
    #[strum(to_string = "Sands", serialize = "EQUIP_SHOES")]
    #[serde(alias = "sands", alias = "EQUIP_SHOES")]
    Sands,
    #[strum(to_string = "Goblet", serialize = "EQUIP_RING")]
    #[serde(alias = "goblet", alias = "EQUIP_RING")]
    Goblet,
    #[strum(to_string = "Circlet", serialize = "EQUIP_DRESS")]
    #[serde(alias = "circlet", alias = "EQUIP_DRESS")]
    Circlet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub rolls: u32,
    #[serde(default)]
    pub is_main_stat: bool,
}

impl StatRecord {
    pub fn main(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            rolls: 0,
            is_main_stat: true,
        }
    }

    pub fn sub(name: impl Into<String>, value: f64, rolls: u32) -> Self {
        Self {
            name: name.into(),
            value,
            rolls,
            is_main_stat: false,
        }
    }

    /// Upgrade rolls that count towards scoring. The main stat never rolls.
    pub fn scoring_rolls(&self) -> u32 {
        if self.is_main_stat {
            0
        } else {
            self.rolls
        }
    }
}

/// One equipped artifact: its slot, the main stat and up to four substats,
/// all kept in a single list distinguished by `is_main_stat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactStats {
    pub slot: Slot,
    pub stats: Vec<StatRecord>,
}

impl ArtifactStats {
    pub fn new(slot: Slot, main_stat: StatRecord, substats: Vec<StatRecord>) -> Self {
        let mut stats = Vec::with_capacity(substats.len() + 1);
        stats.push(StatRecord {
            is_main_stat: true,
            ..main_stat
        });
        stats.extend(substats.into_iter().map(|s| StatRecord {
            is_main_stat: false,
            ..s
        }));
        Self { slot, stats }
    }

    pub fn main_stat(&self) -> FResult<&StatRecord> {
        self.stats
            .iter()
            .find(|s| s.is_main_stat)
            .ok_or(FontaineError::MissingMainStat { slot: self.slot })
    }

    pub fn substats(&self) -> impl Iterator<Item = &StatRecord> {
        self.stats.iter().filter(|s| !s.is_main_stat)
    }

    /// Checks the structural invariants the scorer relies on.
    pub fn validate(&self) -> FResult<()> {
        let slot = self.slot;
        let main_count = self.stats.iter().filter(|s| s.is_main_stat).count();
        match main_count {
            0 => return Err(FontaineError::MissingMainStat { slot }),
            1 => {}
            count => return Err(FontaineError::MultipleMainStats { slot, count }),
        }

        let count = self.stats.len() - main_count;
        if count > MAX_SUBSTATS {
            return Err(FontaineError::TooManySubstats { slot, count });
        }

        let mut seen = HashSet::new();
        for sub in self.substats() {
            if sub.rolls == 0 {
                return Err(FontaineError::ZeroRollSubstat {
                    slot,
                    name: sub.name.clone(),
                });
            }
            if !seen.insert(sub.name.as_str()) {
                return Err(FontaineError::DuplicateSubstat {
                    slot,
                    name: sub.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The three sub-scores, each already rounded to one decimal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTriple {
    pub substats_score: f64,
    pub rolls_score: f64,
    pub crit_value_score: f64,
}

impl ScoreTriple {
    pub fn as_array(&self) -> [f64; 3] {
        [self.substats_score, self.rolls_score, self.crit_value_score]
    }
}

/// Styling tags emitted as data for whatever renders the ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    White,
    Black,
    Transparent,
    #[strum(serialize = "red-200")]
    #[serde(rename = "red-200")]
    Red200,
    #[strum(serialize = "red-600")]
    #[serde(rename = "red-600")]
    Red600,
    #[strum(serialize = "red-700")]
    #[serde(rename = "red-700")]
    Red700,
    #[strum(serialize = "green-200")]
    #[serde(rename = "green-200")]
    Green200,
    #[strum(serialize = "green-600")]
    #[serde(rename = "green-600")]
    Green600,
    #[strum(serialize = "green-700")]
    #[serde(rename = "green-700")]
    Green700,
    #[strum(serialize = "indigo-600")]
    #[serde(rename = "indigo-600")]
    Indigo600,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TextWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub value: f64,
    pub text: String,
    pub text_color: Color,
    pub text_weight: TextWeight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRating {
    pub value: f64,
    pub label: String,
    pub emoji: String,
    pub text_color: Color,
    pub background_color: Color,
    pub tooltips: Vec<Tooltip>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterProgress {
    /// Clamped to `[0, 100]` and snapped to the progress step.
    pub bucketed: f64,
    /// Unclamped mapped vote, kept for ordering.
    pub exact: f64,
    pub color: Color,
}
