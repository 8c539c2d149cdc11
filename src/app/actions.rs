use super::*;
use crate::engine::Progress;
use crate::model::Difficulty;

impl QuizApp {
    pub fn elegir_dificultad(&mut self, level: Difficulty) {
        self.engine.select_difficulty(level);
        self.message.clear();
    }

    pub fn procesar_respuesta(&mut self, respuesta: &str) {
        match self.engine.submit_answer(respuesta) {
            Ok(outcome) => {
                for signal in &outcome.signals {
                    self.player.play(*signal);
                }
                // En el resumen no hace falta la pista de la última respuesta
                self.message = match outcome.progress {
                    Progress::Continue => outcome
                        .signals
                        .first()
                        .map(|s| s.cue().to_string())
                        .unwrap_or_default(),
                    Progress::Done => String::new(),
                };
            }
            Err(e) => {
                self.message = format!("⚠ {e}");
            }
        }
    }

    /// Descarta la partida y vuelve al selector con un motor nuevo
    pub fn volver_al_selector(&mut self) {
        log::debug!("partida descartada");
        self.engine = self.engine.fresh();
        self.message.clear();
    }

    pub fn alternar_sonido(&mut self) {
        self.config.muted = !self.config.muted;
        self.player = default_player(self.config.sounds.clone(), self.config.muted);
        log::info!("sonido {}", if self.config.muted { "silenciado" } else { "activado" });
    }
}
