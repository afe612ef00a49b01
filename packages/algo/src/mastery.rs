//! Mastery Model
//!
//! The three operations the coach is built on:
//! - [`update`] applies one graded answer to a profile score
//! - [`classify`] maps a score onto a mastery level
//! - [`partition`] splits a profile into weak and strong skills
//!
//! All three are pure functions over an explicitly passed profile.

use crate::types::{AnswerEvent, Confidence, MasteryLevel, Skill, SkillScore, StudentProfile};

// ==================== Update deltas ====================

/// Correct answer, fast response
pub const DELTA_CORRECT_FAST: f64 = 0.30;
/// Correct answer, normal response
pub const DELTA_CORRECT_NORMAL: f64 = 0.20;
/// Correct answer with a hint
pub const DELTA_CORRECT_WITH_HINT: f64 = 0.10;
/// Incorrect answer with a hint
pub const DELTA_INCORRECT_WITH_HINT: f64 = -0.10;
/// Incorrect answer, fast or normal response
pub const DELTA_INCORRECT: f64 = -0.15;

// ==================== Classification thresholds ====================

/// Lower bound (inclusive) for [`MasteryLevel::Mastered`]
pub const MASTERED_THRESHOLD: f64 = 0.90;
/// Lower bound (inclusive) for [`MasteryLevel::Satisfactory`]
pub const SATISFACTORY_THRESHOLD: f64 = 0.70;
/// Lower bound (inclusive) for [`MasteryLevel::NeedsImprovement`]
pub const NEEDS_IMPROVEMENT_THRESHOLD: f64 = 0.40;

/// Score delta for one graded answer
pub fn delta(correct: bool, confidence: Confidence) -> f64 {
    match (correct, confidence) {
        (true, Confidence::Fast) => DELTA_CORRECT_FAST,
        (true, Confidence::Normal) => DELTA_CORRECT_NORMAL,
        (true, Confidence::WithHint) => DELTA_CORRECT_WITH_HINT,
        (false, Confidence::WithHint) => DELTA_INCORRECT_WITH_HINT,
        (false, _) => DELTA_INCORRECT,
    }
}

/// Apply one graded answer to the profile and return the new score.
///
/// The delta is additive and the result is clamped to [0, 1]; overflow past
/// either bound is silently absorbed by the clamp.
pub fn update(
    profile: &mut StudentProfile,
    skill: Skill,
    correct: bool,
    confidence: Confidence,
) -> f64 {
    let entry = profile.scores.entry(skill).or_insert(crate::INITIAL_SCORE);
    *entry = (*entry + delta(correct, confidence)).clamp(0.0, 1.0);
    *entry
}

/// [`update`] with the arguments bundled as an [`AnswerEvent`]
pub fn apply_event(profile: &mut StudentProfile, event: &AnswerEvent) -> f64 {
    update(profile, event.skill, event.correct, event.confidence)
}

/// Classify a score. Lower bounds are inclusive.
pub fn classify(score: f64) -> MasteryLevel {
    if score >= MASTERED_THRESHOLD {
        MasteryLevel::Mastered
    } else if score >= SATISFACTORY_THRESHOLD {
        MasteryLevel::Satisfactory
    } else if score >= NEEDS_IMPROVEMENT_THRESHOLD {
        MasteryLevel::NeedsImprovement
    } else {
        MasteryLevel::CriticalWeakArea
    }
}

/// Split the profile into weak and strong skills.
///
/// Weak skills score below the satisfactory threshold and come back sorted
/// ascending (weakest first); strong skills come back sorted descending
/// (strongest first). Ties keep skill declaration order: the score map
/// iterates in that order and both sorts are stable.
pub fn partition(profile: &StudentProfile) -> (Vec<SkillScore>, Vec<SkillScore>) {
    let mut weak = Vec::new();
    let mut strong = Vec::new();

    for (&skill, &score) in &profile.scores {
        let entry = SkillScore { skill, score };
        if score < SATISFACTORY_THRESHOLD {
            weak.push(entry);
        } else {
            strong.push(entry);
        }
    }

    weak.sort_by(|a, b| a.score.total_cmp(&b.score));
    strong.sort_by(|a, b| b.score.total_cmp(&a.score));

    (weak, strong)
}
