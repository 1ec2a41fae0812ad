use crate::config::{Config, ScoreBounds};
use crate::error::FResult;
use crate::scorer::rating::RatingScale;
use crate::scorer::tiers::{Tier, TierTable};
use crate::scorer::Scorer;
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ScorerBuildParams {
    #[builder(default)]
    pub tiers: TierTable,
    #[builder(default)]
    pub scale: RatingScale,
    #[builder(default)]
    pub bounds: ScoreBounds,
}

impl ScorerBuildParams {
    /// Parses the string-encoded tables of a `Config`.
    pub fn from_config(config: &Config) -> FResult<Self> {
        let tiers = TierTable::from_lists(
            &config.tiers.get_bad_stats(),
            &config.tiers.get_average_stats(),
            &config.tiers.get_good_stats(),
        )?;
        let scale = RatingScale::new(config.ratings.get_thresholds()?)?;

        Ok(ScorerBuildParams::builder()
            .tiers(tiers)
            .scale(scale)
            .bounds(config.bounds.clone())
            .build())
    }

    pub fn build_scorer(self) -> FResult<Scorer> {
        self.bounds.validate()?;

        debug!(
            "Scorer Initialized. Tiers: {} bad / {} average / {} good, Thresholds: {:?}",
            self.tiers.members(Tier::Bad).len(),
            self.tiers.members(Tier::Average).len(),
            self.tiers.members(Tier::Good).len(),
            self.scale.thresholds()
        );
        if self.bounds.clamp_sub_scores {
            debug!("   Sub-scores are clamped to [0, 1] before the median");
        }

        Ok(Scorer {
            tiers: self.tiers,
            scale: self.scale,
            bounds: self.bounds,
        })
    }
}
