use crate::error::{FResult, FontaineError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Tier {
    Bad,
    Average,
    Good,
}

/// Immutable stat-name to tier lookup. Names missing from every tier are
/// tier-neutral and classify to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    by_name: HashMap<String, Tier>,
}

impl TierTable {
    /// Builds the table from the three membership lists. A name listed in
    /// more than one tier is a configuration error.
    pub fn from_lists<S: AsRef<str>>(bad: &[S], average: &[S], good: &[S]) -> FResult<Self> {
        let mut by_name = HashMap::new();
        for (tier, names) in [(Tier::Bad, bad), (Tier::Average, average), (Tier::Good, good)] {
            for name in names {
                let name = name.as_ref().trim();
                if name.is_empty() {
                    continue;
                }
                if let Some(previous) = by_name.insert(name.to_string(), tier) {
                    if previous != tier {
                        return Err(FontaineError::Config(format!(
                            "Stat '{}' is listed as both {} and {}",
                            name, previous, tier
                        )));
                    }
                }
            }
        }
        Ok(Self { by_name })
    }

    pub fn classify(&self, name: &str) -> Option<Tier> {
        self.by_name.get(name).copied()
    }

    pub fn members(&self, tier: Tier) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .by_name
            .iter()
            .filter(|(_, t)| **t == tier)
            .map(|(n, _)| n.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        let bad = ["Flat HP", "Flat ATK", "Flat DEF"];
        let average = ["HP%", "DEF%", "ATK%", "Elemental Mastery", "Energy Recharge"];
        let good = ["Crit DMG", "Crit RATE"];
        let mut by_name = HashMap::new();
        by_name.extend(bad.iter().map(|n| (n.to_string(), Tier::Bad)));
        by_name.extend(average.iter().map(|n| (n.to_string(), Tier::Average)));
        by_name.extend(good.iter().map(|n| (n.to_string(), Tier::Good)));
        Self { by_name }
    }
}
