#![allow(dead_code)]

use fontaine::scorer::{ArtifactStats, Slot, StatRecord};

/// Builder for ArtifactStats to clean up tests
pub struct ArtifactBuilder {
    slot: Slot,
    main: StatRecord,
    subs: Vec<StatRecord>,
}

impl ArtifactBuilder {
    pub fn new(slot: Slot, main_name: &str, main_value: f64) -> Self {
        Self {
            slot,
            main: StatRecord::main(main_name, main_value),
            subs: Vec::new(),
        }
    }

    pub fn sub(mut self, name: &str, value: f64, rolls: u32) -> Self {
        self.subs.push(StatRecord::sub(name, value, rolls));
        self
    }

    pub fn build(self) -> ArtifactStats {
        ArtifactStats::new(self.slot, self.main, self.subs)
    }
}

/// Two crit lines with three rolls each: scores (1.0, 0.9, 0.9).
pub fn crit_goblet() -> ArtifactStats {
    ArtifactBuilder::new(Slot::Goblet, "Pyro DMG Bonus", 46.6)
        .sub("Crit DMG", 21.8, 3)
        .sub("Crit RATE", 10.5, 3)
        .sub("ATK%", 5.8, 1)
        .sub("Flat DEF", 19.0, 1)
        .build()
}

/// Flat stats and no crit: scores (0.0, 0.1, 0.0).
pub fn flat_flower() -> ArtifactStats {
    ArtifactBuilder::new(Slot::Flower, "Flat HP", 4780.0)
        .sub("Flat ATK", 33.0, 2)
        .sub("Flat DEF", 39.0, 2)
        .sub("DEF%", 14.6, 3)
        .sub("Energy Recharge", 5.2, 1)
        .build()
}

/// Crit DMG main stat: scores (1.0, 0.2, 0.7).
pub fn crit_circlet() -> ArtifactStats {
    ArtifactBuilder::new(Slot::Circlet, "Crit DMG", 62.2)
        .sub("Crit RATE", 4.9, 1)
        .sub("ATK%", 9.9, 2)
        .sub("Flat ATK", 19.0, 1)
        .sub("HP%", 5.3, 1)
        .build()
}
