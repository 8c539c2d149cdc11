use super::*;
use crate::view_models::{QuestionView, SummaryView};

impl QuizApp {
    pub fn question_view(&self) -> Option<QuestionView> {
        let session = self.engine.session();
        let question = self.engine.current_question()?;
        Some(QuestionView {
            difficulty: session.difficulty?,
            number: session.current_index + 1,
            total: self.engine.total(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            score: session.score,
        })
    }

    pub fn summary_view(&self) -> Option<SummaryView> {
        let session = self.engine.session();
        let rating = self.engine.rating_label().ok()?;
        Some(SummaryView {
            difficulty: session.difficulty?,
            score: session.score,
            total: self.engine.total(),
            rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::app::QuizApp;
    use crate::config::AppConfig;
    use crate::data::read_questions_embedded;
    use crate::engine::Rating;
    use crate::feedback::SilentPlayer;
    use crate::model::Difficulty;

    #[test]
    fn views_follow_phase() {
        let mut app = QuizApp::with_parts(
            AppConfig::default(),
            read_questions_embedded().unwrap(),
            Box::new(SilentPlayer),
        )
        .unwrap();
        assert!(app.question_view().is_none());
        assert!(app.summary_view().is_none());

        app.elegir_dificultad(Difficulty::Medium);
        let q = app.question_view().unwrap();
        assert_eq!(q.number, 1);
        assert_eq!(q.total, 2);
        assert_eq!(q.prompt, "What is 8 + 6?");
        assert_eq!(q.options, vec!["12", "14", "13", "15"]);
        assert!(app.summary_view().is_none());

        app.procesar_respuesta("14");
        app.procesar_respuesta("13");
        assert!(app.question_view().is_none());
        let s = app.summary_view().unwrap();
        assert_eq!((s.score, s.total), (1, 2));
        assert_eq!(s.rating, Rating::Good);
    }
}
