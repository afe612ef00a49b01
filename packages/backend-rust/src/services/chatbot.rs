//! Mili, the rule-based study buddy.
//!
//! Replies are chosen by substring matching over the lowercased message,
//! first matching rule wins. The session tracks subject, difficulty, and a
//! running message count; the count drives which practice question "next"
//! serves, so repeated "next" messages cycle through the question lists.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opening message shown before the student has said anything
pub const GREETING: &str = "Hi! I'm Mili! 🌟\nI'm your learning buddy! Let's start with some fun questions to see what you already know!\nWhat do you want to learn today? 😊";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSubject {
    Math,
    English,
    #[default]
    General,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub current_topic: String,
    pub difficulty: ChatDifficulty,
    pub subject: ChatSubject,
    pub question_count: u32,
}

/// Produce Mili's reply and advance the session.
///
/// The message count goes up once per message, whichever rule fired.
pub fn respond(session: &mut ChatSession, message: &str) -> String {
    let reply = pick_reply(session, message);
    session.question_count += 1;
    reply
}

fn pick_reply(session: &mut ChatSession, message: &str) -> String {
    let lower = message.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("hi") || has("hello") || has("hey") {
        return "Hi beta! 😊\nReady to learn something fun today?\nTell me what you want to study! 📚".to_string();
    }

    if has("math") || has("addition") || has("plus") {
        session.subject = ChatSubject::Math;
        session.current_topic = "addition".to_string();
        return "Math is so much fun! 🔢\nLet's start with easy addition!\nWhat is 2 + 3? 🍎 + 🍎 = ?".to_string();
    }

    if has("subtraction") || has("minus") {
        session.subject = ChatSubject::Math;
        session.current_topic = "subtraction".to_string();
        return "Subtraction is like taking away! ➖\nIf you have 5 apples and eat 2, how many left?\n5 - 2 = ? 🍎".to_string();
    }

    if has("multiplication") || has("times") {
        session.subject = ChatSubject::Math;
        session.current_topic = "multiplication".to_string();
        return "Multiplication is repeated addition! ✖️\n2 × 3 means 2 + 2 + 2\nLet's try: 3 × 2 = ?".to_string();
    }

    if has("english") || has("words") || has("vocabulary") {
        session.subject = ChatSubject::English;
        session.current_topic = "words".to_string();
        return "English words are amazing! 📖\nLet's learn some new words!\nWhat starts with 'A' like Apple? 🍎".to_string();
    }

    if has("phonics") || has("sounds") {
        session.subject = ChatSubject::English;
        session.current_topic = "phonics".to_string();
        return "Phonics help us read! 🔊\n'C' says 'cuh' like in Cat!\nCan you say 'cuh-cuh-cat'? 😊".to_string();
    }

    if has("help") || has("stuck") || has("confused") {
        return "No problem beta! I'm here to help! 🧠💡\nTake your time, I'll explain slowly!\nWhat part is tricky? 🤔".to_string();
    }

    // "confused" never reaches this arm; the help rule above wins
    if has("don't understand") || has("confused") {
        return "Koi baat nahi! Let me explain easier! 😊\nLearning takes time, that's okay!\nWant me to use examples? 🌟".to_string();
    }

    if has("easy") {
        session.difficulty = ChatDifficulty::Easy;
        return "Easy peasy! 😊\nWe'll start with simple questions!\nYou'll do great! ⭐".to_string();
    }

    if has("hard") || has("difficult") {
        session.difficulty = ChatDifficulty::Hard;
        return "Challenge accepted! 💪\nYou're smart enough for hard questions!\nLet's try something tricky! 🧠".to_string();
    }

    if has("next") || has("continue") {
        return next_question(session);
    }

    if has("stop") || has("bye") || has("goodbye") {
        return "Bye bye beta! 👋\nGreat learning today!\nCome back tomorrow for more fun! 🌈".to_string();
    }

    if has("explain addition") {
        return "Addition is like putting things together! ➕\nIf you have 2 cookies and get 3 more, you have 5!\n2 + 3 = 5 🍪".to_string();
    }

    if has("explain subtraction") {
        return "Subtraction is taking away! ➖\nIf you have 5 balloons and 2 fly away, 3 left!\n5 - 2 = 3 🎈".to_string();
    }

    if has("explain multiplication") {
        return "Multiplication is fast adding! ✖️\n3 × 2 means 3 groups of 2, or 2 + 2 + 2!\nEasy way to count fast! 🧮".to_string();
    }

    if has("explain phonics") {
        return "Phonics helps us read sounds! 🔊\nEach letter makes a special sound!\n'A' says 'a' like in apple! 🍎".to_string();
    }

    if has("explain") || has("what is") {
        return "Great question! Let me explain! 🧐\nI'll use simple examples just for you!\nWhat topic do you want to know about? 📚".to_string();
    }

    match session.subject {
        ChatSubject::Math => check_math_answer(message),
        ChatSubject::English => check_english_answer(),
        ChatSubject::General => {
            "That's interesting! 🤔\nCan you tell me more?\nI'm here to help you learn! 😊"
                .to_string()
        }
    }
}

fn next_question(session: &ChatSession) -> String {
    let count = session.question_count as usize;

    let questions: &[&str] = match (session.subject, session.difficulty) {
        (ChatSubject::Math, ChatDifficulty::Easy) => &[
            "What comes after 7? 🔢\nThink about counting!\n7, 8, ?",
            "How many fingers on one hand? 🖐️\nCount them!\n1, 2, 3, 4, 5!",
            "2 + 1 = ? ➕\nEasy addition!\nStart with 2 and add 1 more!",
        ],
        (ChatSubject::Math, _) => &[
            "What is 15 + 8? 🔢\nTry counting on!\n15 + 5 = 20, then + 3 more!",
            "7 × 6 = ? ✖️\nThink: 7 × 5 = 35, plus one more 7!",
            "24 - 9 = ? ➖\nCount back from 24!\n24, 23, 22... 🤔",
        ],
        (ChatSubject::English, ChatDifficulty::Easy) => &[
            "What rhymes with 'cat'? 🐱\nThink: hat, bat, ?\nSomething you wear on feet!",
            "Which word starts with 'B'? 🐝\nBall, Book, or Cat?\nThink of the 'buh' sound!",
            "How many letters in 'dog'? 🐕\nD-O-G\nCount them! 1, 2, ?",
        ],
        (ChatSubject::English, _) => &[
            "Make a sentence with 'happy'! 😊\nUse your imagination!\n'I feel happy when...'",
            "What's the opposite of 'big'? 🐘\nThink small!\nLike mouse is ? than elephant!",
            "Spell 'beautiful' 🌺\nB-E-A-U-?-?-F-U-L\nTry your best!",
        ],
        (ChatSubject::General, _) => {
            return "What would you like to learn? 📚\nMath or English?\nTell me! 😊".to_string()
        }
    };

    questions[count % questions.len()].to_string()
}

fn check_math_answer(answer: &str) -> String {
    if parse_leading_int(answer).is_none() {
        return "Is that a number? 🔢\nTry using digits like 5, 10, 15!\nYou can do it! 💪"
            .to_string();
    }

    let encouragements = [
        "Great try! ⭐\nMath is all about practice!\nWant to try another? 🤔",
        "Good thinking! 🧠\nYou're working so hard!\nLet's try the next one! 😊",
        "Wah! Nice work! 👏\nEvery answer helps you learn!\nReady for more? 📚",
    ];

    let idx = rand::rng().random_range(0..encouragements.len());
    encouragements[idx].to_string()
}

fn check_english_answer() -> String {
    let encouragements = [
        "Beautiful! ✨\nYour English is getting better!\nWant to learn more words? 📖",
        "Super! 🌟\nYou're speaking so well!\nLet's try another word! 😊",
        "Amazing! 🎉\nEnglish is fun with you!\nWhat else should we learn? 🤔",
    ];

    let idx = rand::rng().random_range(0..encouragements.len());
    encouragements[idx].to_string()
}

/// Integer prefix of a message: leading whitespace skipped, optional sign,
/// then digits until the first non-digit. "12 apples" parses as 12.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| sign * v)
}
