use crate::error::QuizError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Texto del botón en el selector
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    // Exacto: "Easy" o " easy" no son válidos
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| QuizError::InvalidDifficulty(s.to_string()))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_option: String,
}

impl Question {
    pub const OPTION_COUNT: usize = 4;

    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_option == selected
    }
}

/// Banco de preguntas por dificultad. Solo se construye validado (ver `data`).
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    sets: BTreeMap<Difficulty, Vec<Question>>,
}

impl QuestionBank {
    pub fn new(sets: BTreeMap<Difficulty, Vec<Question>>) -> Result<Self, QuizError> {
        let bank = Self { sets };
        crate::data::validate_bank(&bank)?;
        Ok(bank)
    }

    pub fn questions(&self, difficulty: Difficulty) -> &[Question] {
        self.sets
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub difficulty: Option<Difficulty>,
    pub current_index: usize,
    pub score: usize,
    pub finished: bool,
}

impl Session {
    pub fn started(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.difficulty, self.finished) {
            (None, _) => Phase::Unselected,
            (Some(_), false) => Phase::InProgress,
            (Some(_), true) => Phase::Finished,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unselected,
    InProgress,
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_only_exact_names() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        for bad in ["expert", "Easy", " medium", ""] {
            assert!(matches!(
                bad.parse::<Difficulty>(),
                Err(QuizError::InvalidDifficulty(v)) if v == bad
            ));
        }
    }

    #[test]
    fn session_phase_follows_fields() {
        assert_eq!(Session::default().phase(), Phase::Unselected);
        let mut s = Session::started(Difficulty::Medium);
        assert_eq!(s.phase(), Phase::InProgress);
        s.finished = true;
        assert_eq!(s.phase(), Phase::Finished);
    }

    #[test]
    fn bank_constructor_rejects_empty_tiers() {
        let err = QuestionBank::new(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestionBank { ref tier, .. } if tier == "easy"));
    }

    #[test]
    fn answer_comparison_is_exact() {
        let q = Question {
            prompt: "What is 2 + 1?".into(),
            options: vec!["2".into(), "3".into(), "4".into(), "5".into()],
            correct_option: "3".into(),
        };
        assert!(q.is_correct("3"));
        assert!(!q.is_correct(" 3"));
        assert!(!q.is_correct("three"));
    }
}
