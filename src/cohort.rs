//! Cross-player comparison of one character.
//!
//! Every player's copy of a character is placed against the quartiles of the
//! whole cohort, stat by stat, and the cohort is ranked by crit value.

use crate::error::{FResult, FontaineError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Owner {
    pub uid: String,
    #[serde(alias = "name")]
    pub nickname: String,
}

/// Final (in-combat) stats of one player's copy of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatBundle {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(alias = "stat_hp")]
    pub hp: f64,
    #[serde(alias = "stat_atk")]
    pub atk: f64,
    #[serde(alias = "stat_def")]
    pub def: f64,
    #[serde(alias = "stat_cr")]
    pub cr: f64,
    #[serde(alias = "stat_cd")]
    pub cd: f64,
    #[serde(alias = "stat_er")]
    pub er: f64,
    #[serde(alias = "stat_em")]
    pub em: f64,
}

impl StatBundle {
    pub fn crit_value(&self) -> f64 {
        self.cd + 2.0 * self.cr
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum CohortStat {
    Hp,
    Atk,
    Def,
    Cr,
    Cd,
    Er,
    Em,
    Cv,
}

impl CohortStat {
    pub fn value(self, bundle: &StatBundle) -> f64 {
        match self {
            Self::Hp => bundle.hp,
            Self::Atk => bundle.atk,
            Self::Def => bundle.def,
            Self::Cr => bundle.cr,
            Self::Cd => bundle.cd,
            Self::Er => bundle.er,
            Self::Em => bundle.em,
            Self::Cv => bundle.crit_value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RelativeStyle {
    Below,
    Neutral,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub p25: f64,
    pub p75: f64,
}

impl Quartiles {
    pub fn style(&self, value: f64) -> RelativeStyle {
        if value < self.p25 {
            RelativeStyle::Below
        } else if value > self.p75 {
            RelativeStyle::Above
        } else {
            RelativeStyle::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledCharacter {
    /// 1-based position by descending crit value.
    pub rank: usize,
    pub cv: f64,
    pub bundle: StatBundle,
    pub styles: BTreeMap<CohortStat, RelativeStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub quartiles: BTreeMap<CohortStat, Quartiles>,
    pub characters: Vec<StyledCharacter>,
}

/// Percentile by linear interpolation between closest ranks
/// (`index = p * (n - 1)`).
pub fn percentile(values: &[f64], p: f64) -> FResult<f64> {
    if values.is_empty() {
        return Err(FontaineError::EmptyCohort);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(FontaineError::Validation(format!(
            "Percentile must lie in [0, 1], got {}",
            p
        )));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let index = p * (sorted.len() - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * (index - lo as f64))
}

pub fn quartiles(values: &[f64]) -> FResult<Quartiles> {
    Ok(Quartiles {
        p25: percentile(values, 0.25)?,
        p75: percentile(values, 0.75)?,
    })
}

pub fn analyze(characters: &[StatBundle]) -> FResult<CohortReport> {
    if characters.is_empty() {
        return Err(FontaineError::EmptyCohort);
    }

    let mut thresholds = BTreeMap::new();
    for stat in CohortStat::iter() {
        let values: Vec<f64> = characters.iter().map(|c| stat.value(c)).collect();
        thresholds.insert(stat, quartiles(&values)?);
    }

    let mut styled: Vec<StyledCharacter> = characters
        .iter()
        .map(|bundle| StyledCharacter {
            rank: 0,
            cv: bundle.crit_value(),
            styles: thresholds
                .iter()
                .map(|(&stat, q)| (stat, q.style(stat.value(bundle))))
                .collect(),
            bundle: bundle.clone(),
        })
        .collect();

    // Stable: equal crit values keep input order.
    styled.sort_by(|a, b| b.cv.total_cmp(&a.cv));
    for (i, entry) in styled.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    debug!(
        "Cohort of {} analysed, CV quartiles {:?}",
        styled.len(),
        thresholds.get(&CohortStat::Cv)
    );

    Ok(CohortReport {
        quartiles: thresholds,
        characters: styled,
    })
}

/// Relative styling of each character against its cohort, best crit value
/// first. An empty cohort is rejected.
pub fn cohort_style(characters: &[StatBundle]) -> FResult<Vec<StyledCharacter>> {
    Ok(analyze(characters)?.characters)
}

pub fn write_csv<W: Write>(characters: &[StatBundle], writer: W) -> FResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "owner_uid",
        "owner_name",
        "stat_hp",
        "stat_atk",
        "stat_def",
        "stat_er",
        "stat_em",
        "stat_cr",
        "stat_cd",
    ])?;
    for c in characters {
        wtr.write_record([
            c.owner.uid.clone(),
            c.owner.nickname.clone(),
            c.hp.to_string(),
            c.atk.to_string(),
            c.def.to_string(),
            c.er.to_string(),
            c.em.to_string(),
            c.cr.to_string(),
            c.cd.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
