use super::range::{map_range, round_to_multiple};
use super::types::{CharacterProgress, Color};
use super::Scorer;
use tracing::debug;

/// Sum of per-artifact votes (+2 excellent, +1 good, 0 decent, -1 bad,
/// -2 terrible). A character with nothing equipped gets the configured
/// empty vote instead of a neutral zero.
pub fn vote(scorer: &Scorer, scores: &[f64]) -> i32 {
    if scores.is_empty() {
        return scorer.bounds.empty_character_vote;
    }
    scores.iter().map(|&s| scorer.scale.classify(s).vote()).sum()
}

pub fn aggregate(scorer: &Scorer, scores: &[f64]) -> CharacterProgress {
    let bounds = &scorer.bounds;
    let vote = vote(scorer, scores) as f64;

    let exact = map_range(vote, bounds.vote_floor, bounds.vote_ceiling, 0.0, 100.0, false);
    let clamped = map_range(vote, bounds.vote_floor, bounds.vote_ceiling, 0.0, 100.0, true);
    let bucketed = round_to_multiple(clamped, bounds.progress_step);

    debug!(
        "Character vote {} over {} artifacts -> {} (exact {:.1})",
        vote,
        scores.len(),
        bucketed,
        exact
    );

    CharacterProgress {
        bucketed,
        exact,
        color: Color::Indigo600,
    }
}
