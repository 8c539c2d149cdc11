use super::*;
use crate::error::QuizError;

impl QuizEngine {
    pub fn select_difficulty(&mut self, level: Difficulty) -> Session {
        self.session = Session::started(level);
        log::info!(
            "dificultad {level} seleccionada ({} preguntas)",
            self.active_questions().len()
        );
        self.session
    }

    /// Variante sin tipar para llamadores que no pasan por el selector.
    /// Con un nombre desconocido el estado no cambia.
    pub fn select_difficulty_named(&mut self, level: &str) -> Result<Session, QuizError> {
        let level = level.parse::<Difficulty>().inspect_err(|e| log::warn!("{e}"))?;
        Ok(self.select_difficulty(level))
    }

    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome, QuizError> {
        if self.session.phase() != Phase::InProgress {
            log::warn!("respuesta {selected:?} rechazada: no hay pregunta activa");
            return Err(QuizError::NoActiveQuestion);
        }

        let total = self.active_questions().len();
        let question = self
            .active_questions()
            .get(self.session.current_index)
            .ok_or(QuizError::NoActiveQuestion)?;
        let correct = question.is_correct(selected);

        let mut signals = Vec::with_capacity(2);
        if correct {
            self.session.score += 1;
            signals.push(FeedbackSignal::CorrectAnswer);
        } else {
            signals.push(FeedbackSignal::WrongAnswer);
        }

        self.session.current_index += 1;
        let progress = if self.session.current_index < total {
            Progress::Continue
        } else {
            self.session.finished = true;
            signals.push(FeedbackSignal::QuizComplete);
            log::info!("quiz terminado: {}/{}", self.session.score, total);
            Progress::Done
        };

        log::debug!(
            "respuesta {selected:?} correcta={correct} índice={} puntos={}",
            self.session.current_index,
            self.session.score
        );

        Ok(AnswerOutcome {
            correct,
            signals,
            progress,
            session: self.session,
        })
    }
}
