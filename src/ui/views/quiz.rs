use crate::QuizApp;
use crate::ui::layout::{centered_panel, option_grid};
use egui::{Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Sin pregunta activa no hay nada que pintar; el dispatch lo corregirá
    let Some(view) = app.question_view() else {
        return;
    };

    let panel_width = 400.0;
    let mut chosen = None;

    centered_panel(ctx, 320.0, panel_width, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🦉").size(48.0));
            ui.add_space(6.0);
            ui.label(view.counter_label());
            ui.add_space(10.0);
            ui.heading(&view.prompt);
            ui.add_space(14.0);
        });

        let grid_width = ui.available_width().min(panel_width);
        chosen = option_grid(ui, &view.options, grid_width);

        if !app.message.is_empty() {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.label(&app.message);
            });
        }
    });

    if let Some(i) = chosen {
        if let Some(option) = view.options.get(i) {
            app.procesar_respuesta(option);
        }
    }
}
