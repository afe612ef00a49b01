#![allow(dead_code)]

pub mod chatbot;
pub mod plan;
pub mod question_bank;
pub mod report;
