use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid difficulty: {0:?}")]
    InvalidDifficulty(String),

    #[error("no active question: pick a difficulty first or start a new round")]
    NoActiveQuestion,

    #[error("the quiz is not finished yet")]
    NotFinished,

    #[error("invalid question bank ({tier}, question {index}): {reason}")]
    InvalidQuestionBank {
        tier: String,
        index: usize,
        reason: String,
    },

    #[error("could not parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),
}
