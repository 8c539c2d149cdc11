use crate::QuizApp;
use crate::ui::helpers::difficulty_row;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.summary_view() else {
        return;
    };

    let panel_width = 400.0;
    let button_h = 36.0;
    let mut replay = None;
    let mut back = false;

    centered_panel(ctx, 300.0, panel_width, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🦉").size(48.0));
            ui.add_space(6.0);
            ui.heading("Well done!");
            ui.add_space(10.0);
            ui.label(summary.score_label());
            ui.label(
                RichText::new(summary.rating_label())
                    .size(20.0)
                    .color(Color32::GOLD),
            );
            ui.add_space(20.0);
            ui.label("Play again:");
            ui.add_space(5.0);
        });

        replay = difficulty_row(ui, width, button_h);

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_sized([width / 2.0, button_h], Button::new("Back to menu"))
                .clicked()
            {
                back = true;
            }
        });
    });

    if let Some(level) = replay {
        app.elegir_dificultad(level);
    } else if back {
        app.volver_al_selector();
    }
}
