use crate::config::SoundAssets;
use std::fmt;

/// Señales que el motor emite; quien presenta decide cómo sonarlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackSignal {
    CorrectAnswer,
    WrongAnswer,
    QuizComplete,
}

impl FeedbackSignal {
    pub fn name(self) -> &'static str {
        match self {
            FeedbackSignal::CorrectAnswer => "correct-answer-feedback",
            FeedbackSignal::WrongAnswer => "wrong-answer-feedback",
            FeedbackSignal::QuizComplete => "quiz-complete-feedback",
        }
    }

    /// Pista visual que acompaña al sonido
    pub fn cue(self) -> &'static str {
        match self {
            FeedbackSignal::CorrectAnswer => "✅ Correct!",
            FeedbackSignal::WrongAnswer => "❌ Not quite.",
            FeedbackSignal::QuizComplete => "🏁 Quiz complete!",
        }
    }
}

impl fmt::Display for FeedbackSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reproduce una señal sin bloquear. Los fallos se registran, nunca se propagan.
pub trait FeedbackPlayer {
    fn play(&mut self, signal: FeedbackSignal);
}

pub struct SilentPlayer;

impl FeedbackPlayer for SilentPlayer {
    fn play(&mut self, _signal: FeedbackSignal) {}
}

/// Nativo: sin backend de audio, deja constancia en el log
pub struct LogPlayer {
    sounds: SoundAssets,
}

impl LogPlayer {
    pub fn new(sounds: SoundAssets) -> Self {
        Self { sounds }
    }
}

impl FeedbackPlayer for LogPlayer {
    fn play(&mut self, signal: FeedbackSignal) {
        log::info!("{signal} ({})", self.sounds.for_signal(signal));
    }
}

#[cfg(target_arch = "wasm32")]
pub struct WebAudioPlayer {
    sounds: SoundAssets,
}

#[cfg(target_arch = "wasm32")]
impl WebAudioPlayer {
    pub fn new(sounds: SoundAssets) -> Self {
        Self { sounds }
    }
}

#[cfg(target_arch = "wasm32")]
impl FeedbackPlayer for WebAudioPlayer {
    fn play(&mut self, signal: FeedbackSignal) {
        let src = self.sounds.for_signal(signal);
        let audio = match web_sys::HtmlAudioElement::new_with_src(src) {
            Ok(a) => a,
            Err(e) => {
                log::warn!("no se pudo crear audio {src}: {e:?}");
                return;
            }
        };
        // La promesa se descarta: no esperamos a que termine
        if let Err(e) = audio.play() {
            log::warn!("no se pudo reproducir {src}: {e:?}");
        }
    }
}

/// Reproductor por defecto según plataforma y configuración
pub fn default_player(sounds: SoundAssets, muted: bool) -> Box<dyn FeedbackPlayer> {
    if muted {
        return Box::new(SilentPlayer);
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(WebAudioPlayer::new(sounds))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(LogPlayer::new(sounds))
    }
}
