pub mod artifact;
pub mod builder;
pub mod character;
pub mod range;
pub mod rating;
pub mod tiers;
pub mod types;

pub use self::artifact::{ArtifactAssessment, TierBreakdown};
pub use self::builder::ScorerBuildParams;
pub use self::rating::{RatingBucket, RatingScale};
pub use self::tiers::{Tier, TierTable};
pub use self::types::{
    ArtifactRating, ArtifactStats, CharacterProgress, ScoreTriple, Slot, StatRecord,
};
use crate::config::{Config, ScoreBounds};
use crate::error::FResult;

/// Stateless scoring engine. Holds only the read-only tables it was built
/// with, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub tiers: TierTable,
    pub scale: RatingScale,
    pub bounds: ScoreBounds,
}

impl Scorer {
    pub fn new(config: &Config) -> FResult<Self> {
        ScorerBuildParams::from_config(config)?.build_scorer()
    }

    /// Scores one artifact given its slot, main stat and substats.
    pub fn score_artifact(
        &self,
        slot: Slot,
        main_stat: StatRecord,
        substats: Vec<StatRecord>,
    ) -> FResult<ArtifactRating> {
        let artifact = ArtifactStats::new(slot, main_stat, substats);
        Ok(self.assess_artifact(&artifact)?.rating)
    }

    /// Full breakdown of an artifact: tier tallies, sub-scores and rating.
    pub fn assess_artifact(&self, artifact: &ArtifactStats) -> FResult<ArtifactAssessment> {
        artifact::assess(self, artifact)
    }

    pub fn aggregate_character(&self, scores: &[f64]) -> CharacterProgress {
        character::aggregate(self, scores)
    }

    pub fn classify(&self, score: f64) -> RatingBucket {
        self.scale.classify(score)
    }

    pub fn tier_of(&self, stat_name: &str) -> Option<Tier> {
        self.tiers.classify(stat_name)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
            scale: RatingScale::default(),
            bounds: ScoreBounds::default(),
        }
    }
}
