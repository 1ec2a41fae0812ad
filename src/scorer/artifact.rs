use super::range::{map_range, median, round_to_tenth};
use super::rating::RatingBucket;
use super::tiers::Tier;
use super::types::{ArtifactRating, ArtifactStats, ScoreTriple, Slot, Tooltip};
use super::Scorer;
use crate::error::{FResult, FontaineError};
use crate::stat_names::{CRIT_DMG, CRIT_RATE};
use serde::Serialize;
use tracing::{debug, trace};

/// Raw tier tallies over every stat of an artifact, main stat included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct TierBreakdown {
    pub good_count: u32,
    /// Number of average-tier stats present; only `min(1, n)` is scored.
    pub average_count: u32,
    pub bad_count: u32,

    pub good_rolls: u32,
    /// Rolls of the single most-rolled average-tier stat.
    pub average_rolls: u32,
    pub bad_rolls: u32,

    pub crit_dmg: f64,
    pub crit_rate: f64,
}

impl TierBreakdown {
    pub fn substats_raw(&self) -> f64 {
        (2 * self.good_count + self.average_count.min(1)) as f64
    }

    pub fn rolls_raw(&self) -> f64 {
        (2 * self.good_rolls + self.average_rolls) as f64
    }

    pub fn crit_value(&self) -> f64 {
        self.crit_dmg + 2.0 * self.crit_rate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactAssessment {
    pub slot: Slot,
    pub breakdown: TierBreakdown,
    pub triple: ScoreTriple,
    pub score: f64,
    pub bucket: RatingBucket,
    pub rating: ArtifactRating,
}

pub fn tally(scorer: &Scorer, artifact: &ArtifactStats) -> TierBreakdown {
    let mut b = TierBreakdown::default();
    for stat in &artifact.stats {
        let rolls = stat.scoring_rolls();
        match scorer.tiers.classify(&stat.name) {
            Some(Tier::Good) => {
                b.good_count += 1;
                b.good_rolls += rolls;
            }
            Some(Tier::Average) => {
                b.average_count += 1;
                b.average_rolls = b.average_rolls.max(rolls);
            }
            Some(Tier::Bad) => {
                b.bad_count += 1;
                b.bad_rolls += rolls;
            }
            None => trace!("'{}' on {} is tier-neutral", stat.name, artifact.slot),
        }

        if stat.name == CRIT_DMG {
            b.crit_dmg += stat.value;
        } else if stat.name == CRIT_RATE {
            b.crit_rate += stat.value;
        }
    }
    b
}

pub fn substats_score(scorer: &Scorer, b: &TierBreakdown) -> f64 {
    let bounds = &scorer.bounds;
    round_to_tenth(map_range(
        b.substats_raw(),
        bounds.substats_floor,
        bounds.substats_ceiling,
        0.0,
        1.0,
        false,
    ))
}

pub fn rolls_score(scorer: &Scorer, slot: Slot, b: &TierBreakdown) -> f64 {
    let bounds = &scorer.bounds;
    round_to_tenth(map_range(
        b.rolls_raw(),
        bounds.rolls_floor,
        bounds.rolls_ceiling_for(slot == Slot::Circlet),
        0.0,
        1.0,
        false,
    ))
}

pub fn crit_value_score(scorer: &Scorer, slot: Slot, b: &TierBreakdown) -> f64 {
    round_to_tenth(map_range(
        b.crit_value(),
        0.0,
        scorer.bounds.cv_ceiling_for(slot == Slot::Circlet),
        0.0,
        1.0,
        false,
    ))
}

pub fn score_triple(scorer: &Scorer, slot: Slot, b: &TierBreakdown) -> ScoreTriple {
    let mut triple = ScoreTriple {
        substats_score: substats_score(scorer, b),
        rolls_score: rolls_score(scorer, slot, b),
        crit_value_score: crit_value_score(scorer, slot, b),
    };
    if scorer.bounds.clamp_sub_scores {
        triple.substats_score = triple.substats_score.clamp(0.0, 1.0);
        triple.rolls_score = triple.rolls_score.clamp(0.0, 1.0);
        triple.crit_value_score = triple.crit_value_score.clamp(0.0, 1.0);
    }
    triple
}

/// The median of the three sub-scores.
pub fn combine(triple: &ScoreTriple) -> f64 {
    // Three values, never empty.
    median(&triple.as_array()).unwrap_or(triple.rolls_score)
}

/// One tooltip per sub-score whose bucket defines a tooltip colour, in the
/// order substats, rolls, crit value.
pub fn tooltips(scorer: &Scorer, triple: &ScoreTriple) -> Vec<Tooltip> {
    let axes = [
        (triple.substats_score, "substats"),
        (triple.rolls_score, "rolls"),
        (triple.crit_value_score, "crit value"),
    ];
    axes.iter()
        .filter_map(|&(value, axis)| {
            let bucket = scorer.scale.classify(value);
            let style = bucket.style();
            style.tooltip_color.map(|text_color| Tooltip {
                value,
                text: format!("{} {}", bucket.label(), axis),
                text_color,
                text_weight: style.tooltip_weight,
            })
        })
        .collect()
}

pub fn assess(scorer: &Scorer, artifact: &ArtifactStats) -> FResult<ArtifactAssessment> {
    artifact.validate()?;

    let slot = artifact.slot;
    let breakdown = tally(scorer, artifact);
    let triple = score_triple(scorer, slot, &breakdown);
    let score = combine(&triple);
    if !score.is_finite() {
        return Err(FontaineError::Validation(format!(
            "{} produced a non-finite score from {:?}",
            slot, triple
        )));
    }

    trace!(
        ?breakdown,
        "{} raw: substats={} rolls={} cv={:.1}",
        slot,
        breakdown.substats_raw(),
        breakdown.rolls_raw(),
        breakdown.crit_value()
    );

    let bucket = scorer.scale.classify(score);
    let style = bucket.style();
    let rating = ArtifactRating {
        value: score,
        label: bucket.label().to_string(),
        emoji: bucket.emoji().to_string(),
        text_color: style.text_color,
        background_color: style.background_color,
        tooltips: tooltips(scorer, &triple),
    };

    debug!(
        "{}: substats={:.1} rolls={:.1} cv={:.1} -> {:.1} ({})",
        slot, triple.substats_score, triple.rolls_score, triple.crit_value_score, score, bucket
    );

    Ok(ArtifactAssessment {
        slot,
        breakdown,
        triple,
        score,
        bucket,
        rating,
    })
}
