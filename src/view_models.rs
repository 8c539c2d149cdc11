// src/view_models.rs

use crate::engine::Rating;
use crate::model::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub difficulty: Difficulty,
    pub number: usize, // 1-based
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub score: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryView {
    pub difficulty: Difficulty,
    pub score: usize,
    pub total: usize,
    pub rating: Rating,
}

impl QuestionView {
    pub fn counter_label(&self) -> String {
        format!(
            "{} · Question {} of {}",
            self.difficulty.label(),
            self.number,
            self.total
        )
    }
}

impl SummaryView {
    pub fn score_label(&self) -> String {
        format!("Your score: {} / {}", self.score, self.total)
    }

    pub fn rating_label(&self) -> String {
        self.rating.label()
    }
}
