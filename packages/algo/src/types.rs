//! Common Types and Constants
//!
//! Shared data structures used by the mastery model and its callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==================== Constants ====================

/// Initial mastery score for every skill
pub const INITIAL_SCORE: f64 = 0.5;

/// Lowest grade the coach supports
pub const MIN_GRADE: u8 = 1;

/// Highest grade the coach supports
pub const MAX_GRADE: u8 = 5;

/// Allowed daily study durations in minutes
pub const STUDY_MINUTES_OPTIONS: [u32; 4] = [15, 30, 45, 60];

// ==================== Subjects and skills ====================

/// Subject a skill belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    English,
}

impl Subject {
    /// Human-readable subject name
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "English",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The closed set of skills the coach tracks.
///
/// Declaration order is math first, then language arts. The derived `Ord`
/// follows this order and is the deterministic tie-break whenever skills
/// with equal scores must be ranked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    PlaceValue,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Fractions,
    Decimals,
    Geometry,
    Measurement,
    Phonics,
    SightWords,
    Grammar,
    Reading,
    Comprehension,
}

impl Skill {
    /// All skills in declaration order
    pub const ALL: [Skill; 14] = [
        Skill::PlaceValue,
        Skill::Addition,
        Skill::Subtraction,
        Skill::Multiplication,
        Skill::Division,
        Skill::Fractions,
        Skill::Decimals,
        Skill::Geometry,
        Skill::Measurement,
        Skill::Phonics,
        Skill::SightWords,
        Skill::Grammar,
        Skill::Reading,
        Skill::Comprehension,
    ];

    /// Subject this skill belongs to
    pub fn subject(&self) -> Subject {
        match self {
            Skill::PlaceValue
            | Skill::Addition
            | Skill::Subtraction
            | Skill::Multiplication
            | Skill::Division
            | Skill::Fractions
            | Skill::Decimals
            | Skill::Geometry
            | Skill::Measurement => Subject::Math,
            Skill::Phonics
            | Skill::SightWords
            | Skill::Grammar
            | Skill::Reading
            | Skill::Comprehension => Subject::English,
        }
    }

    /// Human-readable skill name
    pub fn label(&self) -> &'static str {
        match self {
            Skill::PlaceValue => "Place Value",
            Skill::Addition => "Addition",
            Skill::Subtraction => "Subtraction",
            Skill::Multiplication => "Multiplication",
            Skill::Division => "Division",
            Skill::Fractions => "Fractions",
            Skill::Decimals => "Decimals",
            Skill::Geometry => "Geometry",
            Skill::Measurement => "Measurement",
            Skill::Phonics => "Phonics",
            Skill::SightWords => "Sight Words",
            Skill::Grammar => "Grammar",
            Skill::Reading => "Reading",
            Skill::Comprehension => "Comprehension",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==================== Answer confidence ====================

/// How confidently a question was answered, bucketed from response latency
/// by the assessment layer. The model consumes the bucket, never the raw
/// latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Answered quickly without hesitation
    Fast,
    /// Answered at a normal pace
    Normal,
    /// Took long enough that a hint was likely involved
    WithHint,
}

// ==================== Mastery levels ====================

/// Classification of a mastery score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    Mastered,
    Satisfactory,
    NeedsImprovement,
    CriticalWeakArea,
}

impl MasteryLevel {
    /// Human-readable level name
    pub fn label(&self) -> &'static str {
        match self {
            MasteryLevel::Mastered => "Mastered",
            MasteryLevel::Satisfactory => "Satisfactory",
            MasteryLevel::NeedsImprovement => "Needs Improvement",
            MasteryLevel::CriticalWeakArea => "Critical Weak Area",
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==================== Student profile ====================

/// A student and their per-skill mastery scores.
///
/// The score map always holds every [`Skill`]; an unknown skill is
/// unrepresentable. Input validation (non-empty name, grade and study-minute
/// ranges) belongs to the layer that constructs profiles from user input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub grade: u8,
    pub study_minutes: u32,
    pub scores: BTreeMap<Skill, f64>,
}

impl StudentProfile {
    /// Create a profile with every skill at the initial score
    pub fn new(name: impl Into<String>, grade: u8, study_minutes: u32) -> Self {
        let scores = Skill::ALL
            .iter()
            .map(|&skill| (skill, INITIAL_SCORE))
            .collect();
        Self {
            name: name.into(),
            grade,
            study_minutes,
            scores,
        }
    }

    /// Current score for a skill.
    ///
    /// Every skill is a key of the map, so this only falls back to the
    /// initial score for maps deserialized from partial data.
    pub fn score(&self, skill: Skill) -> f64 {
        self.scores.get(&skill).copied().unwrap_or(INITIAL_SCORE)
    }
}

// ==================== Answer events ====================

/// One graded answer, the ephemeral input to a mastery update
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AnswerEvent {
    pub skill: Skill,
    pub correct: bool,
    pub confidence: Confidence,
}

/// A skill paired with its score, as produced by the weak/strong partition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: Skill,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_order_is_math_then_english() {
        assert!(Skill::Measurement < Skill::Phonics);
        assert!(Skill::PlaceValue < Skill::Addition);
        assert!(Skill::Reading < Skill::Comprehension);
    }

    #[test]
    fn test_all_skills_cover_both_subjects() {
        let math = Skill::ALL
            .iter()
            .filter(|s| s.subject() == Subject::Math)
            .count();
        let english = Skill::ALL
            .iter()
            .filter(|s| s.subject() == Subject::English)
            .count();
        assert_eq!(math, 9, "expected 9 math skills, got {}", math);
        assert_eq!(english, 5, "expected 5 language-arts skills, got {}", english);
    }

    #[test]
    fn test_new_profile_has_every_skill_at_initial_score() {
        let profile = StudentProfile::new("Asha", 3, 30);
        assert_eq!(profile.scores.len(), Skill::ALL.len());
        for skill in Skill::ALL {
            assert_eq!(
                profile.score(skill),
                INITIAL_SCORE,
                "{} should start at {}",
                skill,
                INITIAL_SCORE
            );
        }
    }

    #[test]
    fn test_skill_serializes_snake_case() {
        let json = serde_json::to_string(&Skill::SightWords).unwrap();
        assert_eq!(json, "\"sight_words\"");
        let back: Skill = serde_json::from_str("\"place_value\"").unwrap();
        assert_eq!(back, Skill::PlaceValue);
    }
}
