mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Phase;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR CAMBIAR DIFICULTAD (solo durante el quiz y el resumen)
        if matches!(self.phase(), Phase::InProgress | Phase::Finished) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA Y SONIDO
        bottom_panel(self, ctx);

        // Dispatch por estado
        match self.phase() {
            Phase::Unselected => views::difficulty::ui_difficulty_select(self, ctx),
            Phase::InProgress => views::quiz::ui_quiz(self, ctx),
            Phase::Finished => views::summary::ui_summary_view(self, ctx),
        }
    }
}
