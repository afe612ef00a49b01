//! Diagnostic question bank.
//!
//! The bank is a fixed set of multiple-choice questions, gated by grade.
//! Math questions come first, then language arts, then two mixed warm-down
//! questions every grade receives. A diagnostic round is the first twelve
//! questions of the gated set.

use coach_algo::Skill;
use serde::Serialize;

/// Number of questions in one diagnostic round
pub const QUESTIONS_PER_ROUND: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One multiple-choice diagnostic question. The correct option is kept as an
/// index into `options`; grading compares the submitted index against it.
#[derive(Clone, Copy, Debug)]
pub struct Question {
    pub id: &'static str,
    pub skill: Skill,
    pub difficulty: Difficulty,
    pub min_grade: u8,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explanation: &'static str,
}

const MATH_QUESTIONS: &[Question] = &[
    Question {
        id: "math_place_value_1",
        skill: Skill::PlaceValue,
        difficulty: Difficulty::Medium,
        min_grade: 1,
        prompt: "What is the value of 5 in the number 52?",
        options: ["5 ones", "5 tens", "50 ones", "5 hundreds"],
        correct_index: 1,
        explanation: "In 52, the 5 is in the tens place, so it means 5 tens or 50!",
    },
    Question {
        id: "math_counting_1",
        skill: Skill::PlaceValue,
        difficulty: Difficulty::Easy,
        min_grade: 1,
        prompt: "What number comes after 9?",
        options: ["8", "10", "11", "9"],
        correct_index: 1,
        explanation: "After 9 comes 10! 9, 10, 11... keep counting! 🔢",
    },
    Question {
        id: "math_addition_1",
        skill: Skill::Addition,
        difficulty: Difficulty::Medium,
        min_grade: 2,
        prompt: "What is 25 + 17?",
        options: ["32", "42", "52", "62"],
        correct_index: 1,
        explanation: "25 + 17 = 42. You can count: 25 + 10 = 35, then +7 = 42!",
    },
    Question {
        id: "math_addition_2",
        skill: Skill::Addition,
        difficulty: Difficulty::Easy,
        min_grade: 2,
        prompt: "What is 8 + 5?",
        options: ["12", "13", "14", "15"],
        correct_index: 1,
        explanation: "8 + 5 = 13. Count on from 8: 9, 10, 11, 12, 13! 🎯",
    },
    Question {
        id: "math_multiplication_1",
        skill: Skill::Multiplication,
        difficulty: Difficulty::Medium,
        min_grade: 3,
        prompt: "What is 7 × 8?",
        options: ["48", "56", "64", "72"],
        correct_index: 1,
        explanation: "7 × 8 = 56. Think: 7 groups of 8, or 8 groups of 7! 🎯",
    },
    Question {
        id: "math_fractions_1",
        skill: Skill::Fractions,
        difficulty: Difficulty::Medium,
        min_grade: 3,
        prompt: "Which shape shows 1/2 shaded?",
        options: [
            "🍕 1/4 pizza",
            "🍕 half pizza",
            "🍕 3/4 pizza",
            "🍕 whole pizza",
        ],
        correct_index: 1,
        explanation: "1/2 means one part out of two equal parts - exactly half! 🍕",
    },
    Question {
        id: "math_subtraction_1",
        skill: Skill::Subtraction,
        difficulty: Difficulty::Medium,
        min_grade: 3,
        prompt: "What is 45 - 18?",
        options: ["27", "37", "33", "29"],
        correct_index: 0,
        explanation: "45 - 18 = 27. Take away 10 first (35), then 8 more (27)! 🎈",
    },
    Question {
        id: "math_decimals_1",
        skill: Skill::Decimals,
        difficulty: Difficulty::Medium,
        min_grade: 4,
        prompt: "Which is bigger: 0.5 or 0.75?",
        options: ["0.5", "0.75", "They are equal", "Cannot tell"],
        correct_index: 1,
        explanation: "0.75 is bigger because 75 hundredths is more than 50 hundredths! 📊",
    },
    Question {
        id: "math_division_1",
        skill: Skill::Division,
        difficulty: Difficulty::Medium,
        min_grade: 4,
        prompt: "What is 24 ÷ 6?",
        options: ["3", "4", "6", "8"],
        correct_index: 1,
        explanation: "24 ÷ 6 = 4. 6 groups of 4 make 24, or 24 divided into 6 equal parts is 4! 🍰",
    },
];

const ENGLISH_QUESTIONS: &[Question] = &[
    Question {
        id: "english_phonics_1",
        skill: Skill::Phonics,
        difficulty: Difficulty::Medium,
        min_grade: 1,
        prompt: "Which word starts with the 'c' sound like in 'cat'?",
        options: ["Dog", "Car", "Ball", "House"],
        correct_index: 1,
        explanation: "Car starts with the \"c\" sound, just like cat! Cuh-Cuh-Car! 🚗",
    },
    Question {
        id: "english_alphabet_1",
        skill: Skill::Phonics,
        difficulty: Difficulty::Easy,
        min_grade: 1,
        prompt: "Which letter comes after B in the alphabet?",
        options: ["A", "C", "D", "E"],
        correct_index: 1,
        explanation: "A, B, C... C comes after B! Great job! 📝",
    },
    Question {
        id: "english_sight_words_1",
        skill: Skill::SightWords,
        difficulty: Difficulty::Medium,
        min_grade: 2,
        prompt: "Which word means 'the opposite of big'?",
        options: ["Large", "Small", "Tall", "Wide"],
        correct_index: 1,
        explanation: "Small means little - the opposite of big! Great job! 🐘🐁",
    },
    Question {
        id: "english_rhyming_1",
        skill: Skill::Phonics,
        difficulty: Difficulty::Easy,
        min_grade: 2,
        prompt: "Which word rhymes with 'sun'?",
        options: ["Moon", "Run", "Fun", "Cat"],
        correct_index: 1,
        explanation: "Sun and run both end with \"un\" sound! Great rhyming! ☀️🏃",
    },
    Question {
        id: "english_grammar_1",
        skill: Skill::Grammar,
        difficulty: Difficulty::Medium,
        min_grade: 3,
        prompt: "Which is the correct sentence?",
        options: [
            "I goes to school",
            "I go to school",
            "I going to school",
            "I went to school everyday",
        ],
        correct_index: 1,
        explanation: "With \"I\", we say \"I go\" not \"I goes\". Remember: I go, you go, we go! 🏫",
    },
    Question {
        id: "english_comprehension_1",
        skill: Skill::Comprehension,
        difficulty: Difficulty::Medium,
        min_grade: 3,
        prompt: "Tom has a red ball. The ball is big. What color is Tom's ball?",
        options: ["Blue", "Big", "Red", "Small"],
        correct_index: 2,
        explanation: "The story says Tom has a RED ball! Reading carefully helps! 🔴",
    },
    Question {
        id: "english_vocabulary_1",
        skill: Skill::Reading,
        difficulty: Difficulty::Medium,
        min_grade: 4,
        prompt: "What does 'enormous' mean?",
        options: ["Very small", "Very big", "Very fast", "Very slow"],
        correct_index: 1,
        explanation: "Enormous means very, very big! Like an enormous dinosaur! 🦕",
    },
    Question {
        id: "english_grammar_2",
        skill: Skill::Grammar,
        difficulty: Difficulty::Medium,
        min_grade: 4,
        prompt: "Which sentence is correct?",
        options: [
            "She don't like apples",
            "She doesn't like apples",
            "She doesn't likes apples",
            "She don't likes apples",
        ],
        correct_index: 1,
        explanation: "With she/he/it, we use doesn't! She doesn't like apples. ✅",
    },
];

/// Warm-down questions every grade receives, after the gated blocks
const MIXED_QUESTIONS: &[Question] = &[
    Question {
        id: "math_patterns_1",
        skill: Skill::PlaceValue,
        difficulty: Difficulty::Easy,
        min_grade: 1,
        prompt: "What comes next: 2, 4, 6, 8, ?",
        options: ["9", "10", "11", "12"],
        correct_index: 1,
        explanation: "Counting by 2s! 2, 4, 6, 8, 10... pattern found! 🔢",
    },
    Question {
        id: "english_spelling_1",
        skill: Skill::SightWords,
        difficulty: Difficulty::Medium,
        min_grade: 1,
        prompt: "How do you spell 'because'?",
        options: ["Becaus", "Becuse", "Because", "Bicos"],
        correct_index: 2,
        explanation: "B-E-C-A-U-S-E! Practice spelling makes perfect! ✍️",
    },
];

/// The diagnostic set for a grade: gated math block, gated language-arts
/// block, both mixed questions, truncated to [`QUESTIONS_PER_ROUND`].
pub fn questions_for_grade(grade: u8) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();
    questions.extend(MATH_QUESTIONS.iter().filter(|q| grade >= q.min_grade));
    questions.extend(ENGLISH_QUESTIONS.iter().filter(|q| grade >= q.min_grade));
    questions.extend(MIXED_QUESTIONS.iter());
    questions.truncate(QUESTIONS_PER_ROUND);
    questions
}

/// Look up a question by id over the whole bank, not the truncated round.
pub fn find(id: &str) -> Option<Question> {
    MATH_QUESTIONS
        .iter()
        .chain(ENGLISH_QUESTIONS.iter())
        .chain(MIXED_QUESTIONS.iter())
        .find(|q| q.id == id)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_algo::Subject;

    #[test]
    fn test_round_is_capped_at_twelve() {
        for grade in 1..=5 {
            let questions = questions_for_grade(grade);
            assert!(
                questions.len() <= QUESTIONS_PER_ROUND,
                "grade {} round has {} questions",
                grade,
                questions.len()
            );
        }
    }

    #[test]
    fn test_grade_one_gets_easy_set() {
        let questions = questions_for_grade(1);
        let ids: Vec<&str> = questions.iter().map(|q| q.id).collect();
        assert!(ids.contains(&"math_place_value_1"));
        assert!(ids.contains(&"math_counting_1"));
        assert!(ids.contains(&"english_phonics_1"));
        assert!(ids.contains(&"math_patterns_1"));
        assert!(ids.contains(&"english_spelling_1"));
        assert!(!ids.contains(&"math_multiplication_1"), "grade 1 must not see grade 3 math");
    }

    #[test]
    fn test_grade_five_round_is_math_heavy() {
        // The full gated set is 9 math + 8 english + 2 mixed; truncation to
        // twelve keeps all math and the first three language-arts questions.
        let questions = questions_for_grade(5);
        assert_eq!(questions.len(), QUESTIONS_PER_ROUND);
        let math = questions
            .iter()
            .filter(|q| q.skill.subject() == Subject::Math)
            .count();
        assert_eq!(math, 9, "expected 9 math questions, got {}", math);
        assert_eq!(questions[11].id, "english_sight_words_1");
    }

    #[test]
    fn test_find_reaches_questions_outside_the_truncated_round() {
        // english_spelling_1 is truncated away for grade 5 but must still
        // grade correctly when answered from a grade 1 round.
        let question = find("english_spelling_1");
        assert!(question.is_some());
        assert_eq!(question.map(|q| q.correct_index), Some(2));
    }

    #[test]
    fn test_find_unknown_id_is_none() {
        assert!(find("math_imaginary_9").is_none());
    }

    #[test]
    fn test_correct_indices_are_in_bounds() {
        for question in MATH_QUESTIONS
            .iter()
            .chain(ENGLISH_QUESTIONS.iter())
            .chain(MIXED_QUESTIONS.iter())
        {
            assert!(
                question.correct_index < question.options.len(),
                "{} correct index out of bounds",
                question.id
            );
        }
    }
}
