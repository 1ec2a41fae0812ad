use crate::error::{FResult, FontaineError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub tiers: TierDefinitions,
    #[command(flatten)]
    pub ratings: RatingThresholds,
    #[command(flatten)]
    pub bounds: ScoreBounds,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TierDefinitions {
    #[arg(long, default_value = "Flat HP,Flat ATK,Flat DEF")]
    pub tier_bad_stats: String,
    #[arg(long, default_value = "HP%,DEF%,ATK%,Elemental Mastery,Energy Recharge")]
    pub tier_average_stats: String,
    #[arg(long, default_value = "Crit DMG,Crit RATE")]
    pub tier_good_stats: String,
}

impl Default for TierDefinitions {
    fn default() -> Self {
        Self {
            tier_bad_stats: "Flat HP,Flat ATK,Flat DEF".to_string(),
            tier_average_stats: "HP%,DEF%,ATK%,Elemental Mastery,Energy Recharge".to_string(),
            tier_good_stats: "Crit DMG,Crit RATE".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingThresholds {
    /// Terrible/bad, bad/decent, decent/good and good/excellent cut points.
    #[arg(long, default_value = "0.30,0.50,0.70,0.90")]
    pub rating_thresholds: String,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            rating_thresholds: "0.30,0.50,0.70,0.90".to_string(),
        }
    }
}

/// Domain constants that bound each sub-score and the character vote.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreBounds {
    // === TIER COUNT ===
    // 2*good + min(1, average): one average stat alone is the floor,
    // two crit stats plus an average one the ceiling.
    #[arg(long, default_value_t = 1.0)]
    pub substats_floor: f64,
    #[arg(long, default_value_t = 5.0)]
    pub substats_ceiling: f64,

    // === TIER ROLLS ===
    #[arg(long, default_value_t = 1.0)]
    pub rolls_floor: f64,
    #[arg(long, default_value_t = 15.0)]
    pub rolls_ceiling: f64,
    // Circlet main stat already takes a crit line
    #[arg(long, default_value_t = 13.0)]
    pub rolls_ceiling_circlet: f64,

    // === CRIT VALUE ===
    #[arg(long, default_value_t = 50.0)]
    pub cv_ceiling: f64,
    // 38.8 CD substat + 62.2 CD main stat
    #[arg(long, default_value_t = 100.0)]
    pub cv_ceiling_circlet: f64,

    // === CHARACTER ===
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    pub vote_floor: f64,
    #[arg(long, default_value_t = 5.0)]
    pub vote_ceiling: f64,
    #[arg(long, default_value_t = -10, allow_hyphen_values = true)]
    pub empty_character_vote: i32,
    #[arg(long, default_value_t = 25.0)]
    pub progress_step: f64,

    /// Clamp each rounded sub-score to [0, 1] before taking the median.
    #[arg(long, default_value_t = false)]
    pub clamp_sub_scores: bool,
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            substats_floor: 1.0,
            substats_ceiling: 5.0,
            rolls_floor: 1.0,
            rolls_ceiling: 15.0,
            rolls_ceiling_circlet: 13.0,
            cv_ceiling: 50.0,
            cv_ceiling_circlet: 100.0,
            vote_floor: -5.0,
            vote_ceiling: 5.0,
            empty_character_vote: -10,
            progress_step: 25.0,
            clamp_sub_scores: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FontaineError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays the values the user actually typed on the command line.
    /// Defaults filled in by clap never override file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(tiers.tier_bad_stats);
        update_if_present!(tiers.tier_average_stats);
        update_if_present!(tiers.tier_good_stats);

        update_if_present!(ratings.rating_thresholds);

        update_if_present!(bounds.substats_floor);
        update_if_present!(bounds.substats_ceiling);
        update_if_present!(bounds.rolls_floor);
        update_if_present!(bounds.rolls_ceiling);
        update_if_present!(bounds.rolls_ceiling_circlet);
        update_if_present!(bounds.cv_ceiling);
        update_if_present!(bounds.cv_ceiling_circlet);
        update_if_present!(bounds.vote_floor);
        update_if_present!(bounds.vote_ceiling);
        update_if_present!(bounds.empty_character_vote);
        update_if_present!(bounds.progress_step);
        update_if_present!(bounds.clamp_sub_scores);
    }
}

impl TierDefinitions {
    pub fn get_bad_stats(&self) -> Vec<String> {
        parse_name_list(&self.tier_bad_stats)
    }

    pub fn get_average_stats(&self) -> Vec<String> {
        parse_name_list(&self.tier_average_stats)
    }

    pub fn get_good_stats(&self) -> Vec<String> {
        parse_name_list(&self.tier_good_stats)
    }
}

impl RatingThresholds {
    pub fn get_thresholds(&self) -> FResult<[f64; 4]> {
        parse_f64_array::<4>(&self.rating_thresholds, "rating_thresholds")
    }
}

impl ScoreBounds {
    pub fn rolls_ceiling_for(&self, is_circlet: bool) -> f64 {
        if is_circlet {
            self.rolls_ceiling_circlet
        } else {
            self.rolls_ceiling
        }
    }

    pub fn cv_ceiling_for(&self, is_circlet: bool) -> f64 {
        if is_circlet {
            self.cv_ceiling_circlet
        } else {
            self.cv_ceiling
        }
    }

    pub fn validate(&self) -> FResult<()> {
        let values = [
            ("substats_floor", self.substats_floor),
            ("substats_ceiling", self.substats_ceiling),
            ("rolls_floor", self.rolls_floor),
            ("rolls_ceiling", self.rolls_ceiling),
            ("rolls_ceiling_circlet", self.rolls_ceiling_circlet),
            ("cv_ceiling", self.cv_ceiling),
            ("cv_ceiling_circlet", self.cv_ceiling_circlet),
            ("vote_floor", self.vote_floor),
            ("vote_ceiling", self.vote_ceiling),
            ("progress_step", self.progress_step),
        ];
        if let Some((name, v)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FontaineError::Config(format!(
                "{} must be finite, got {}",
                name, v
            )));
        }
        if self.progress_step <= 0.0 {
            return Err(FontaineError::Config(format!(
                "progress_step must be positive, got {}",
                self.progress_step
            )));
        }
        Ok(())
    }
}

fn parse_name_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_f64_array<const N: usize>(s: &str, name: &str) -> FResult<[f64; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(FontaineError::Config(format!(
            "--{} requires {} values, got {}",
            name,
            N,
            parts.len()
        )));
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p.trim().parse().map_err(|_| {
            FontaineError::Config(format!("Invalid number '{}' in {}", p.trim(), name))
        })?;
    }
    Ok(arr)
}
