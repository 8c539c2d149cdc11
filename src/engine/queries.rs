use super::*;
use crate::error::QuizError;

impl QuizEngine {
    pub fn total(&self) -> usize {
        self.active_questions().len()
    }

    /// Pregunta a mostrar; `None` si no hay dificultad o ya terminó
    pub fn current_question(&self) -> Option<&Question> {
        if self.session.finished {
            return None;
        }
        self.active_questions().get(self.session.current_index)
    }

    pub fn rating_label(&self) -> Result<Rating, QuizError> {
        if self.session.phase() != Phase::Finished {
            return Err(QuizError::NotFinished);
        }
        Ok(Rating::from_score(self.session.score, self.total()))
    }
}

#[cfg(test)]
mod tests {
    use crate::data::read_questions_embedded;
    use crate::engine::{QuizEngine, Rating};
    use crate::error::QuizError;
    use crate::model::Difficulty;

    #[test]
    fn rating_requires_finished_session() {
        let mut e = QuizEngine::new(read_questions_embedded().unwrap()).unwrap();
        assert!(matches!(e.rating_label(), Err(QuizError::NotFinished)));
        e.select_difficulty(Difficulty::Easy);
        e.submit_answer("3").unwrap();
        assert!(matches!(e.rating_label(), Err(QuizError::NotFinished)));
        e.submit_answer("3").unwrap();
        assert_eq!(e.rating_label().unwrap(), Rating::Excellent);
    }

    #[test]
    fn half_correct_is_good() {
        let mut e = QuizEngine::start(read_questions_embedded().unwrap(), Difficulty::Medium).unwrap();
        e.submit_answer("14").unwrap();
        e.submit_answer("12").unwrap();
        assert_eq!(e.rating_label().unwrap(), Rating::Good);
    }

    #[test]
    fn none_correct_is_encouraging() {
        let mut e = QuizEngine::start(read_questions_embedded().unwrap(), Difficulty::Easy).unwrap();
        e.submit_answer("4").unwrap();
        e.submit_answer("1").unwrap();
        assert_eq!(e.rating_label().unwrap(), Rating::Encouraging);
    }

    #[test]
    fn current_question_tracks_index() {
        let mut e = QuizEngine::new(read_questions_embedded().unwrap()).unwrap();
        assert!(e.current_question().is_none());
        e.select_difficulty(Difficulty::Easy);
        assert_eq!(e.current_question().unwrap().prompt, "What is 2 + 1?");
        e.submit_answer("2").unwrap();
        assert_eq!(e.current_question().unwrap().prompt, "What is 5 - 2?");
        e.submit_answer("3").unwrap();
        assert!(e.current_question().is_none());
        assert_eq!(e.total(), 2);
    }
}
