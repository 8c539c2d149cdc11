// src/data.rs

use crate::error::QuizError;
use crate::model::{Difficulty, Question, QuestionBank};
use std::collections::{BTreeMap, HashSet};

const EMBEDDED_BANK: &str = include_str!("data/questions.yaml");

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank, QuizError> {
    parse_question_bank(EMBEDDED_BANK)
}

pub fn parse_question_bank(yaml: &str) -> Result<QuestionBank, QuizError> {
    let sets: BTreeMap<Difficulty, Vec<Question>> = serde_yaml::from_str(yaml)?;
    let bank = QuestionBank::new(sets)?;
    log::debug!(
        "banco cargado: {}",
        Difficulty::ALL
            .iter()
            .map(|d| format!("{d}={}", bank.questions(*d).len()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(bank)
}

/// Cada dificultad debe existir y tener al menos una pregunta bien formada
pub fn validate_bank(bank: &QuestionBank) -> Result<(), QuizError> {
    for difficulty in Difficulty::ALL {
        let questions = bank.questions(difficulty);
        if questions.is_empty() {
            return Err(invalid(difficulty, 0, "tier has no questions"));
        }
        for (i, q) in questions.iter().enumerate() {
            validate_question(q).map_err(|reason| invalid(difficulty, i, reason))?;
        }
    }
    Ok(())
}

fn validate_question(q: &Question) -> Result<(), &'static str> {
    if q.prompt.trim().is_empty() {
        return Err("empty prompt");
    }
    if q.options.len() != Question::OPTION_COUNT {
        return Err("expected exactly 4 options");
    }
    let distinct: HashSet<&str> = q.options.iter().map(String::as_str).collect();
    if distinct.len() != q.options.len() {
        return Err("options must be distinct");
    }
    if !distinct.contains(q.correct_option.as_str()) {
        return Err("answer is not one of the options");
    }
    Ok(())
}

fn invalid(difficulty: Difficulty, index: usize, reason: &str) -> QuizError {
    QuizError::InvalidQuestionBank {
        tier: difficulty.to_string(),
        index,
        reason: reason.to_string(),
    }
}
