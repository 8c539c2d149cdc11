use crate::QuizApp;
use crate::model::Difficulty;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_difficulty_select(app: &mut QuizApp, ctx: &Context) {
    let button_h = 40.0;
    let estimated_h = 80.0 + (button_h + 8.0) * Difficulty::ALL.len() as f32;
    let mut picked = None;

    centered_panel(ctx, estimated_h, 360.0, |ui| {
        let content_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("Choose Difficulty");
            ui.add_space(20.0);
            for level in Difficulty::ALL {
                if big_list_button(ui, level.label(), content_width, button_h) {
                    picked = Some(level);
                }
                ui.add_space(8.0);
            }
        });
    });

    if let Some(level) = picked {
        app.elegir_dificultad(level);
    }
}
