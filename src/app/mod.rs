use crate::config::AppConfig;
use crate::data::read_questions_embedded;
use crate::engine::QuizEngine;
use crate::error::QuizError;
use crate::feedback::{FeedbackPlayer, default_player};
use crate::model::{Phase, QuestionBank};

// Submódulos
pub mod actions;
pub mod view_models;

/// Capa de presentación: posee el motor y el reproductor, y solo traduce
/// clics en llamadas al motor.
pub struct QuizApp {
    pub config: AppConfig,
    pub engine: QuizEngine,
    pub message: String,
    player: Box<dyn FeedbackPlayer>,
}

impl QuizApp {
    pub fn new(config: AppConfig) -> Result<Self, QuizError> {
        let bank = read_questions_embedded()?;
        let player = default_player(config.sounds.clone(), config.muted);
        Self::with_parts(config, bank, player)
    }

    pub fn with_parts(
        config: AppConfig,
        bank: QuestionBank,
        player: Box<dyn FeedbackPlayer>,
    ) -> Result<Self, QuizError> {
        Ok(Self {
            config,
            engine: QuizEngine::new(bank)?,
            message: String::new(),
            player,
        })
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}
