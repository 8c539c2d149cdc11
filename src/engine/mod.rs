use crate::data::validate_bank;
use crate::error::QuizError;
use crate::feedback::FeedbackSignal;
use crate::model::{Difficulty, Phase, Question, QuestionBank, Session};

// Submódulos
pub mod actions;
pub mod queries;
pub mod rating;

pub use rating::Rating;

/// Estado y transiciones de una partida: selección → preguntas → resumen.
///
/// Se construye explícitamente y lo posee quien la presenta; para empezar de
/// cero basta con crear otra.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: QuestionBank,
    session: Session,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Done,
}

/// Resultado de `submit_answer`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub signals: Vec<FeedbackSignal>,
    pub progress: Progress,
    pub session: Session,
}

impl QuizEngine {
    /// Un banco con dificultades vacías dejaría la partida sin salida
    pub fn new(bank: QuestionBank) -> Result<Self, QuizError> {
        validate_bank(&bank)?;
        Ok(Self {
            bank,
            session: Session::default(),
        })
    }

    /// Motor ya posicionado en la primera pregunta de `difficulty`
    pub fn start(bank: QuestionBank, difficulty: Difficulty) -> Result<Self, QuizError> {
        let mut engine = Self::new(bank)?;
        engine.select_difficulty(difficulty);
        Ok(engine)
    }

    /// Motor nuevo sobre el mismo banco, sin partida
    pub fn fresh(&self) -> Self {
        Self {
            bank: self.bank.clone(),
            session: Session::default(),
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Preguntas de la dificultad activa (vacío si no hay ninguna elegida)
    pub fn active_questions(&self) -> &[Question] {
        match self.session.difficulty {
            Some(d) => self.bank.questions(d),
            None => &[],
        }
    }
}
