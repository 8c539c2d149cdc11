use crate::feedback::FeedbackSignal;

const DEFAULT_ASSET_BASE: &str = "/assets";
const ENV_MUTED: &str = "STAR_QUIZ_MUTED";
const ENV_ASSET_BASE: &str = "STAR_QUIZ_ASSET_BASE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundAssets {
    pub correct: String,
    pub wrong: String,
    pub win: String,
}

impl SoundAssets {
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            correct: format!("{base}/correct.mp3"),
            wrong: format!("{base}/wrong.mp3"),
            win: format!("{base}/win.mp3"),
        }
    }

    pub fn for_signal(&self, signal: FeedbackSignal) -> &str {
        match signal {
            FeedbackSignal::CorrectAnswer => &self.correct,
            FeedbackSignal::WrongAnswer => &self.wrong,
            FeedbackSignal::QuizComplete => &self.win,
        }
    }
}

impl Default for SoundAssets {
    fn default() -> Self {
        Self::with_base(DEFAULT_ASSET_BASE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub window_title: String,
    pub muted: bool,
    pub sounds: SoundAssets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Star Quiz".to_string(),
            muted: false,
            sounds: SoundAssets::default(),
        }
    }
}

impl AppConfig {
    /// Nativo: variables de entorno en tiempo de ejecución
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Web: mismas variables, fijadas al compilar
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            ENV_MUTED => option_env!("STAR_QUIZ_MUTED").map(str::to_string),
            ENV_ASSET_BASE => option_env!("STAR_QUIZ_ASSET_BASE").map(str::to_string),
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(muted) = lookup(ENV_MUTED) {
            config.muted = parse_flag(&muted);
        }
        if let Some(base) = lookup(ENV_ASSET_BASE).filter(|s| !s.trim().is_empty()) {
            config.sounds = SoundAssets::with_base(base.trim());
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_bundled_assets() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert!(!config.muted);
        assert_eq!(config.sounds.correct, "/assets/correct.mp3");
        assert_eq!(config.sounds.for_signal(FeedbackSignal::QuizComplete), "/assets/win.mp3");
    }

    #[test]
    fn env_overrides_muted_and_base() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STAR_QUIZ_MUTED", "Yes"),
            ("STAR_QUIZ_ASSET_BASE", "https://cdn.example.org/quiz/"),
        ]));
        assert!(config.muted);
        assert_eq!(config.sounds.wrong, "https://cdn.example.org/quiz/wrong.mp3");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STAR_QUIZ_MUTED", "0"),
            ("STAR_QUIZ_ASSET_BASE", "  "),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
