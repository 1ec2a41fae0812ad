use crate::error::{FResult, FontaineError};
use crate::scorer::{ArtifactAssessment, ArtifactStats, CharacterProgress, Scorer, Slot};
use crate::stat_names;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    #[serde(default)]
    pub artifacts: Vec<ArtifactStats>,
}

/// A player's showcase as handed over by the data provider, already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub uid: String,
    pub nickname: String,
    #[serde(default)]
    pub characters: Vec<CharacterSnapshot>,
}

impl PlayerSnapshot {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut snapshot: PlayerSnapshot = serde_json::from_str(&content)?;
        snapshot.normalize_stat_names();
        info!(
            "Loaded {} ({}) with {} characters from {}",
            snapshot.nickname,
            snapshot.uid,
            snapshot.characters.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Rewrites provider property codes into display names.
    pub fn normalize_stat_names(&mut self) {
        for stat in self
            .characters
            .iter_mut()
            .flat_map(|c| c.artifacts.iter_mut())
            .flat_map(|a| a.stats.iter_mut())
        {
            let display = stat_names::display_name(&stat.name);
            if display != stat.name {
                stat.name = display.to_string();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterReport {
    pub name: String,
    pub progress: CharacterProgress,
    /// Equipped artifacts in slot order.
    pub artifacts: Vec<ArtifactAssessment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub uid: String,
    pub nickname: String,
    pub characters: Vec<CharacterReport>,
}

pub fn rate_character(scorer: &Scorer, character: &CharacterSnapshot) -> FResult<CharacterReport> {
    let mut seen = HashSet::new();
    for artifact in &character.artifacts {
        if !seen.insert(artifact.slot) {
            return Err(FontaineError::Validation(format!(
                "{} has more than one {} equipped",
                character.name, artifact.slot
            )));
        }
    }

    let mut artifacts = character
        .artifacts
        .iter()
        .map(|a| scorer.assess_artifact(a))
        .collect::<FResult<Vec<_>>>()?;
    artifacts.sort_by_key(|a| a.slot);

    let slot_count = Slot::iter().count();
    if artifacts.len() < slot_count {
        debug!(
            "{} has {} of {} slots equipped",
            character.name,
            artifacts.len(),
            slot_count
        );
    }

    let scores: Vec<f64> = artifacts.iter().map(|a| a.score).collect();
    let progress = scorer.aggregate_character(&scores);

    Ok(CharacterReport {
        name: character.name.clone(),
        progress,
        artifacts,
    })
}

/// Rates every character of a player, alphabetically by name.
pub fn rate_player(scorer: &Scorer, snapshot: &PlayerSnapshot) -> FResult<PlayerReport> {
    let mut characters = snapshot
        .characters
        .par_iter()
        .map(|c| rate_character(scorer, c))
        .collect::<FResult<Vec<_>>>()?;
    characters.sort_by(|a, b| a.name.cmp(&b.name));

    if characters.is_empty() {
        warn!(
            "{} ({}) has no characters on display",
            snapshot.nickname, snapshot.uid
        );
    }

    Ok(PlayerReport {
        uid: snapshot.uid.clone(),
        nickname: snapshot.nickname.clone(),
        characters,
    })
}
