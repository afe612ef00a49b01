//! Daily and weekly study plan generation.
//!
//! Plans are built from the student's mastery profile. The daily plan drills
//! the single weakest skill; the weekly plan spreads the top weak skills over
//! five weekdays and adds a mini-test plus a weekend activity.

use coach_algo::{partition, Skill, SkillScore, StudentProfile, Subject};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSkill {
    pub subject: Subject,
    pub skill: Skill,
    pub score: f64,
}

impl From<SkillScore> for FocusSkill {
    fn from(entry: SkillScore) -> Self {
        Self {
            subject: entry.skill.subject(),
            skill: entry.skill,
            score: entry.score,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub focus: FocusSkill,
    pub warmup: Warmup,
    pub lesson: MicroLesson,
    pub practice: Practice,
    pub parent_note: ParentNote,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Warmup {
    pub title: String,
    pub duration: String,
    pub activities: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroLesson {
    pub title: String,
    pub duration: String,
    pub explanation: String,
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Practice {
    pub title: String,
    pub duration: String,
    pub questions: Vec<PracticeQuestion>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeQuestion {
    pub question: String,
    pub answer: String,
    pub hint: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentNote {
    pub title: String,
    pub duration: String,
    pub notes: Vec<String>,
}

/// A 15-minute plan around the student's weakest skill. Students with no
/// weak skill yet (fresh profile scores are all 0.5, which counts as weak)
/// still get an addition-centered default.
pub fn daily_plan(profile: &StudentProfile) -> DailyPlan {
    let (weak, _strong) = partition(profile);
    let focus: FocusSkill = weak
        .first()
        .copied()
        .map(FocusSkill::from)
        .unwrap_or(FocusSkill {
            subject: Subject::Math,
            skill: Skill::Addition,
            score: 0.5,
        });

    DailyPlan {
        warmup: warmup(focus.subject),
        lesson: micro_lesson(focus.skill),
        practice: practice(focus.skill),
        parent_note: parent_note(focus.skill),
        focus,
    }
}

fn warmup(subject: Subject) -> Warmup {
    match subject {
        Subject::Math => Warmup {
            title: "🔢 Math Warm-up".to_string(),
            duration: "2 minutes".to_string(),
            activities: vec![
                "Count from 1 to 20 aloud".to_string(),
                "Show 5 fingers and count down".to_string(),
                "Quick: What comes after 7? After 12?".to_string(),
            ],
        },
        Subject::English => Warmup {
            title: "📚 English Warm-up".to_string(),
            duration: "2 minutes".to_string(),
            activities: vec![
                "Say the alphabet A-Z".to_string(),
                "Name 3 animals that start with B".to_string(),
                "What rhymes with \"cat\"?".to_string(),
            ],
        },
    }
}

fn micro_lesson(skill: Skill) -> MicroLesson {
    match skill {
        Skill::Addition => MicroLesson {
            title: "🧮 Addition Made Easy".to_string(),
            duration: "3 minutes".to_string(),
            explanation: "Addition means putting things together! When we add, numbers get bigger."
                .to_string(),
            examples: vec![
                "2 + 3 = 5 (two apples plus three apples)".to_string(),
                "Use your fingers to count!".to_string(),
                "Start with the bigger number and count up".to_string(),
            ],
        },
        Skill::Phonics => MicroLesson {
            title: "🔤 Phonics Fun".to_string(),
            duration: "3 minutes".to_string(),
            explanation: "Letters make sounds! When we put sounds together, we make words."
                .to_string(),
            examples: vec![
                "C makes the \"kuh\" sound: Cat, Car, Cup".to_string(),
                "Say each sound slowly: C-A-T".to_string(),
                "Blend the sounds together: Cat!".to_string(),
            ],
        },
        other => MicroLesson {
            title: "🌟 Learning Time".to_string(),
            duration: "3 minutes".to_string(),
            explanation: format!("Today we're learning about {}!", other.label()),
            examples: vec![
                "Listen carefully to the explanation".to_string(),
                "Try the examples yourself".to_string(),
                "Ask questions if you're confused".to_string(),
            ],
        },
    }
}

fn practice(skill: Skill) -> Practice {
    match skill {
        Skill::Addition => Practice {
            title: "✏️ Practice Time".to_string(),
            duration: "8 minutes".to_string(),
            questions: practice_questions(&[
                ("3 + 2 = ?", "5", "Use your fingers!"),
                ("4 + 1 = ?", "5", "Count forward from 4"),
                ("2 + 2 = ?", "4", "Double of 2 is 4"),
                ("5 + 0 = ?", "5", "Adding 0 doesn't change the number"),
                ("1 + 4 = ?", "5", "Count from 1 to 5"),
            ]),
        },
        Skill::Phonics => Practice {
            title: "🔊 Sound Practice".to_string(),
            duration: "8 minutes".to_string(),
            questions: practice_questions(&[
                ("What sound does 'M' make?", "Moon", "Mmm-moon"),
                ("What sound does 'S' make?", "Sun", "Sss-sun"),
                ("What sound does 'B' make?", "Ball", "Buh-ball"),
                ("What sound does 'D' make?", "Dog", "Duh-dog"),
                ("What sound does 'F' make?", "Fish", "Fff-fish"),
            ]),
        },
        _ => Practice {
            title: "🎯 Practice Questions".to_string(),
            duration: "8 minutes".to_string(),
            questions: practice_questions(&[
                ("Try your best on this practice!", "Great job!", "Take your time"),
                ("Practice makes perfect!", "Well done!", "You can do it"),
                ("Keep learning and growing!", "Awesome!", "Believe in yourself"),
                ("Every mistake helps you learn!", "Excellent!", "Stay positive"),
                ("You're doing great!", "Amazing!", "Keep it up"),
            ]),
        },
    }
}

fn practice_questions(triples: &[(&str, &str, &str)]) -> Vec<PracticeQuestion> {
    triples
        .iter()
        .map(|(question, answer, hint)| PracticeQuestion {
            question: (*question).to_string(),
            answer: (*answer).to_string(),
            hint: (*hint).to_string(),
        })
        .collect()
}

fn parent_note(skill: Skill) -> ParentNote {
    let label = skill.label();
    ParentNote {
        title: "👨‍👩‍👧‍👦 Parent Note".to_string(),
        duration: "1 minute".to_string(),
        notes: vec![
            format!("Today's focus: {label}"),
            format!("Please help your child focus on {label} today."),
            "Praise effort, not just results! Encourage their hard work!".to_string(),
        ],
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub focus_areas: Vec<FocusSkill>,
    pub days: Vec<DayPlan>,
    pub weekly_test: WeeklyTest,
    pub weekend_activity: WeekendActivity,
    pub parent_tips: ParentTips,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    pub theme: String,
    pub activities: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTest {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendActivity {
    pub title: String,
    pub description: String,
    pub options: Vec<WeekendOption>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendOption {
    pub name: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentTips {
    pub daily_routine: Vec<String>,
    pub motivation: Vec<String>,
}

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// A Monday-to-Friday plan cycling through the weak skills, weakest first.
/// Days past the end of the weak list wrap back to the start; a student with
/// no weak skills gets mixed-practice days.
pub fn weekly_plan(profile: &StudentProfile) -> WeeklyPlan {
    let (weak, _strong) = partition(profile);

    let focus_areas: Vec<FocusSkill> = weak.iter().take(3).copied().map(FocusSkill::from).collect();

    let day_focus: [Option<&SkillScore>; 5] = [
        weak.first(),
        weak.get(1),
        weak.get(2).or_else(|| weak.first()),
        weak.get(3).or_else(|| weak.get(1)),
        weak.get(4).or_else(|| weak.first()),
    ];

    let days = WEEKDAYS
        .iter()
        .zip(day_focus)
        .map(|(day, focus)| day_plan(day, focus))
        .collect();

    WeeklyPlan {
        weekly_test: weekly_test(&focus_areas),
        focus_areas,
        days,
        weekend_activity: weekend_activity(),
        parent_tips: parent_tips(),
    }
}

fn day_plan(day: &str, focus: Option<&SkillScore>) -> DayPlan {
    let Some(entry) = focus else {
        return DayPlan {
            day: day.to_string(),
            theme: "Mixed Practice".to_string(),
            activities: vec![
                "Review previous concepts".to_string(),
                "Practice both Math and English".to_string(),
                "Fun educational games".to_string(),
            ],
        };
    };

    let label = entry.skill.label();
    match entry.skill.subject() {
        Subject::Math => DayPlan {
            day: day.to_string(),
            theme: format!("Math Focus: {label}"),
            activities: vec![
                "Warm-up: Counting practice (2 min)".to_string(),
                format!("Main: {label} exercises (8 min)"),
                "Game: Math puzzle or activity (5 min)".to_string(),
            ],
        },
        Subject::English => DayPlan {
            day: day.to_string(),
            theme: format!("English Focus: {label}"),
            activities: vec![
                "Warm-up: Alphabet practice (2 min)".to_string(),
                format!("Main: {label} practice (8 min)"),
                "Game: Word games or storytelling (5 min)".to_string(),
            ],
        },
    }
}

fn weekly_test(focus_areas: &[FocusSkill]) -> WeeklyTest {
    WeeklyTest {
        title: "Weekly Mini-Test".to_string(),
        description: "Quick assessment of this week's learning".to_string(),
        duration: "10 minutes".to_string(),
        skills: focus_areas
            .iter()
            .map(|focus| format!("{}: {}", focus.subject.label(), focus.skill.label()))
            .collect(),
        tips: vec![
            "Don't worry about scores".to_string(),
            "Just try your best".to_string(),
            "Review mistakes together".to_string(),
        ],
    }
}

fn weekend_activity() -> WeekendActivity {
    WeekendActivity {
        title: "Weekend Fun Activity".to_string(),
        description: "Learning through play and real-life practice".to_string(),
        options: vec![
            WeekendOption {
                name: "Kitchen Math".to_string(),
                description: "Count ingredients, measure cups while cooking together".to_string(),
                skills: vec![
                    "Measurement".to_string(),
                    "Counting".to_string(),
                    "Fractions".to_string(),
                ],
            },
            WeekendOption {
                name: "Story Time".to_string(),
                description: "Read a picture book and talk about the story".to_string(),
                skills: vec![
                    "Reading".to_string(),
                    "Comprehension".to_string(),
                    "Vocabulary".to_string(),
                ],
            },
            WeekendOption {
                name: "Shopping Game".to_string(),
                description: "Add up prices, count change at the store".to_string(),
                skills: vec![
                    "Addition".to_string(),
                    "Subtraction".to_string(),
                    "Money concepts".to_string(),
                ],
            },
        ],
    }
}

fn parent_tips() -> ParentTips {
    ParentTips {
        daily_routine: vec![
            "Fix a regular study time".to_string(),
            "Create a quiet study space".to_string(),
            "Keep water and snacks nearby".to_string(),
            "Celebrate small wins daily".to_string(),
        ],
        motivation: vec![
            "Praise effort, not just results".to_string(),
            "Use stickers or stars for progress".to_string(),
            "Connect learning to daily life".to_string(),
            "Be patient and encouraging".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_algo::{update, Confidence};

    fn profile_with(scores: &[(Skill, f64)]) -> StudentProfile {
        let mut profile = StudentProfile::new("Asha", 3, 15);
        for (skill, score) in scores {
            profile.scores.insert(*skill, *score);
        }
        profile
    }

    #[test]
    fn test_daily_plan_targets_weakest_skill() {
        let profile = profile_with(&[(Skill::Fractions, 0.1), (Skill::Phonics, 0.3)]);
        let plan = daily_plan(&profile);
        assert_eq!(plan.focus.skill, Skill::Fractions);
        assert_eq!(plan.focus.subject, Subject::Math);
        assert_eq!(plan.warmup.title, "🔢 Math Warm-up");
    }

    #[test]
    fn test_daily_plan_addition_gets_real_drills() {
        let profile = profile_with(&[(Skill::Addition, 0.2)]);
        let plan = daily_plan(&profile);
        assert_eq!(plan.lesson.title, "🧮 Addition Made Easy");
        assert_eq!(plan.practice.questions.len(), 5);
        assert_eq!(plan.practice.questions[0].question, "3 + 2 = ?");
        assert_eq!(plan.practice.questions[0].answer, "5");
    }

    #[test]
    fn test_daily_plan_falls_back_to_addition_when_all_strong() {
        let mut profile = StudentProfile::new("Ben", 2, 15);
        for skill in Skill::ALL {
            profile.scores.insert(skill, 0.95);
        }
        let plan = daily_plan(&profile);
        assert_eq!(plan.focus.skill, Skill::Addition);
        assert_eq!(plan.focus.score, 0.5);
    }

    #[test]
    fn test_daily_plan_generic_lesson_names_the_skill() {
        let profile = profile_with(&[(Skill::Decimals, 0.1)]);
        let plan = daily_plan(&profile);
        assert_eq!(plan.lesson.title, "🌟 Learning Time");
        assert!(plan.lesson.explanation.contains("Decimals"));
        assert!(plan.parent_note.notes[0].contains("Decimals"));
    }

    #[test]
    fn test_weekly_plan_has_five_weekdays() {
        let profile = profile_with(&[(Skill::Addition, 0.2)]);
        let plan = weekly_plan(&profile);
        let days: Vec<&str> = plan.days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    }

    #[test]
    fn test_weekly_plan_wraps_when_few_weak_skills() {
        // Two weak skills: Wednesday and Friday wrap to the first,
        // Thursday wraps to the second.
        let mut profile = profile_with(&[(Skill::Fractions, 0.2), (Skill::Grammar, 0.4)]);
        for skill in Skill::ALL {
            if skill != Skill::Fractions && skill != Skill::Grammar {
                profile.scores.insert(skill, 0.9);
            }
        }
        let plan = weekly_plan(&profile);
        assert_eq!(plan.days[0].theme, "Math Focus: Fractions");
        assert_eq!(plan.days[1].theme, "English Focus: Grammar");
        assert_eq!(plan.days[2].theme, "Math Focus: Fractions");
        assert_eq!(plan.days[3].theme, "English Focus: Grammar");
        assert_eq!(plan.days[4].theme, "Math Focus: Fractions");
    }

    #[test]
    fn test_weekly_plan_all_strong_gives_mixed_days() {
        let mut profile = StudentProfile::new("Cam", 4, 30);
        for skill in Skill::ALL {
            profile.scores.insert(skill, 0.85);
        }
        let plan = weekly_plan(&profile);
        assert!(plan.focus_areas.is_empty());
        assert!(plan.days.iter().all(|d| d.theme == "Mixed Practice"));
        assert!(plan.weekly_test.skills.is_empty());
    }

    #[test]
    fn test_weekly_test_names_subject_and_skill() {
        let profile = profile_with(&[(Skill::PlaceValue, 0.1)]);
        let plan = weekly_plan(&profile);
        assert_eq!(plan.weekly_test.skills[0], "Math: Place Value");
    }

    #[test]
    fn test_weekend_activity_options() {
        let profile = profile_with(&[(Skill::Addition, 0.2)]);
        let plan = weekly_plan(&profile);
        let names: Vec<&str> = plan
            .weekend_activity
            .options
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, ["Kitchen Math", "Story Time", "Shopping Game"]);
    }

    #[test]
    fn test_plans_reflect_updated_mastery() {
        let mut profile = profile_with(&[(Skill::Multiplication, 0.6)]);
        // Three wrong answers drive multiplication to the bottom.
        for _ in 0..3 {
            update(&mut profile, Skill::Multiplication, false, Confidence::Normal);
        }
        let plan = daily_plan(&profile);
        assert_eq!(plan.focus.skill, Skill::Multiplication);
    }
}
