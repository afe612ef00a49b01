//! Parent-facing progress report.
//!
//! The report summarizes the mastery profile for an adult reader: overall
//! performance, strong and weak skill lists, per-subject breakdowns, and a
//! set of intervention recommendations keyed on the weakest skill and the
//! configured study time.

use coach_algo::{classify, partition, MasteryLevel, Skill, StudentProfile, Subject};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub student: StudentSummary,
    pub assessment_attempt: u32,
    pub overall: OverallPerformance,
    pub strong_skills: Vec<SkillReportEntry>,
    pub weak_skills: Vec<SkillReportEntry>,
    pub math: Vec<SkillReportEntry>,
    pub english: Vec<SkillReportEntry>,
    pub recommendations: Vec<String>,
    pub next_week_goals: Vec<String>,
    pub parent_note: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub name: String,
    pub grade: u8,
    pub study_minutes: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallPerformance {
    pub score: f64,
    pub percent: u32,
    pub level: MasteryLevel,
    pub level_label: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReportEntry {
    pub subject: Subject,
    pub skill: Skill,
    pub label: &'static str,
    pub score: f64,
    pub percent: u32,
    pub level: MasteryLevel,
}

/// Build the progress report for one student. The overall level classifies
/// the mean of all skill scores; strong and weak lists reuse the partition
/// ordering (strong descending, weak ascending).
pub fn progress_report(profile: &StudentProfile, assessment_attempt: u32) -> ProgressReport {
    let (weak, strong) = partition(profile);

    let mean = profile.scores.values().sum::<f64>() / profile.scores.len() as f64;

    ProgressReport {
        student: StudentSummary {
            name: profile.name.clone(),
            grade: profile.grade,
            study_minutes: profile.study_minutes,
        },
        assessment_attempt,
        overall: OverallPerformance {
            score: mean,
            percent: percent(mean),
            level: classify(mean),
            level_label: classify(mean).label(),
        },
        strong_skills: strong.iter().map(|s| entry(s.skill, s.score)).collect(),
        weak_skills: weak.iter().map(|s| entry(s.skill, s.score)).collect(),
        math: subject_breakdown(profile, Subject::Math),
        english: subject_breakdown(profile, Subject::English),
        recommendations: recommendations(profile),
        next_week_goals: next_week_goals(),
        parent_note: parent_note(),
    }
}

fn entry(skill: Skill, score: f64) -> SkillReportEntry {
    SkillReportEntry {
        subject: skill.subject(),
        skill,
        label: skill.label(),
        score,
        percent: percent(score),
        level: classify(score),
    }
}

/// Per-subject breakdown in skill declaration order
fn subject_breakdown(profile: &StudentProfile, subject: Subject) -> Vec<SkillReportEntry> {
    Skill::ALL
        .iter()
        .filter(|skill| skill.subject() == subject)
        .map(|&skill| entry(skill, profile.score(skill)))
        .collect()
}

fn recommendations(profile: &StudentProfile) -> Vec<String> {
    let (weak, _strong) = partition(profile);
    let mut recommendations: Vec<String> = Vec::new();

    if let Some(weakest) = weak.first() {
        recommendations.push(format!(
            "Focus on {} - practice 10 minutes daily",
            weakest.skill.label()
        ));
        recommendations.push("Use real-life examples to explain concepts".to_string());
        recommendations.push("Celebrate small improvements and effort".to_string());
    }

    if profile.study_minutes < 30 {
        recommendations.push("Consider increasing daily study time to 30 minutes".to_string());
    }

    recommendations.push("Maintain consistent daily routine".to_string());
    recommendations.push("Review progress weekly with child".to_string());

    recommendations
}

fn next_week_goals() -> Vec<String> {
    vec![
        "Improve weak skills by 15-20%".to_string(),
        "Maintain strong skills above 80%".to_string(),
        "Complete daily learning plan consistently".to_string(),
        "Score above 70% in weekly test".to_string(),
    ]
}

fn parent_note() -> String {
    "Your child is showing good progress. Please focus on the weak areas and ensure \
     daily practice. Be patient and encourage your child's efforts. Remember, every \
     child learns at their own pace."
        .to_string()
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(scores: &[(Skill, f64)]) -> StudentProfile {
        let mut profile = StudentProfile::new("Asha", 3, 15);
        for (skill, score) in scores {
            profile.scores.insert(*skill, *score);
        }
        profile
    }

    #[test]
    fn test_overall_is_mean_of_all_skills() {
        // Fresh profile: every skill at 0.5, mean 0.5, "Needs Improvement".
        let profile = StudentProfile::new("Asha", 3, 15);
        let report = progress_report(&profile, 1);
        assert_eq!(report.overall.score, 0.5);
        assert_eq!(report.overall.percent, 50);
        assert_eq!(report.overall.level, MasteryLevel::NeedsImprovement);
    }

    #[test]
    fn test_recommendations_name_the_weakest_skill() {
        let profile = profile_with(&[(Skill::Fractions, 0.1)]);
        let report = progress_report(&profile, 1);
        assert_eq!(
            report.recommendations[0],
            "Focus on Fractions - practice 10 minutes daily"
        );
    }

    #[test]
    fn test_short_study_time_adds_recommendation() {
        let profile = profile_with(&[(Skill::Addition, 0.2)]);
        let report = progress_report(&profile, 1);
        assert!(report
            .recommendations
            .contains(&"Consider increasing daily study time to 30 minutes".to_string()));
    }

    #[test]
    fn test_long_study_time_skips_time_recommendation() {
        let mut profile = profile_with(&[(Skill::Addition, 0.2)]);
        profile.study_minutes = 45;
        let report = progress_report(&profile, 1);
        assert!(!report
            .recommendations
            .contains(&"Consider increasing daily study time to 30 minutes".to_string()));
    }

    #[test]
    fn test_all_strong_profile_skips_weak_recommendations() {
        let mut profile = StudentProfile::new("Ben", 2, 45);
        for skill in Skill::ALL {
            profile.scores.insert(skill, 0.95);
        }
        let report = progress_report(&profile, 2);
        assert!(report.weak_skills.is_empty());
        assert_eq!(
            report.recommendations,
            vec![
                "Maintain consistent daily routine".to_string(),
                "Review progress weekly with child".to_string(),
            ]
        );
        assert_eq!(report.overall.level, MasteryLevel::Mastered);
    }

    #[test]
    fn test_breakdowns_cover_both_subjects() {
        let profile = StudentProfile::new("Cam", 4, 30);
        let report = progress_report(&profile, 1);
        assert_eq!(report.math.len(), 9);
        assert_eq!(report.english.len(), 5);
        assert!(report.math.iter().all(|e| e.subject == Subject::Math));
        assert!(report.english.iter().all(|e| e.subject == Subject::English));
    }

    #[test]
    fn test_weak_list_is_ascending_and_strong_descending() {
        let profile = profile_with(&[
            (Skill::Fractions, 0.1),
            (Skill::Grammar, 0.3),
            (Skill::Addition, 0.95),
            (Skill::Phonics, 0.8),
        ]);
        let report = progress_report(&profile, 1);
        assert_eq!(report.weak_skills[0].skill, Skill::Fractions);
        assert_eq!(report.weak_skills[1].skill, Skill::Grammar);
        assert_eq!(report.strong_skills[0].skill, Skill::Addition);
        assert_eq!(report.strong_skills[1].skill, Skill::Phonics);
    }

    #[test]
    fn test_report_carries_attempt_number() {
        let profile = StudentProfile::new("Dia", 1, 15);
        let report = progress_report(&profile, 3);
        assert_eq!(report.assessment_attempt, 3);
        assert_eq!(report.next_week_goals.len(), 4);
    }
}
