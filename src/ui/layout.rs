use crate::QuizApp;
use egui::{Button, CentralPanel, Context, Frame, Grid, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Change difficulty").clicked() {
                app.volver_al_selector();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- TEMA Y SONIDO -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
            let sound = if app.config.muted { "🔇 Sound off" } else { "🔊 Sound on" };
            if ui.button(sound).clicked() {
                app.alternar_sonido();
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Opciones en rejilla de dos columnas. Devuelve el índice pulsado.
pub fn option_grid(ui: &mut Ui, options: &[String], panel_width: f32) -> Option<usize> {
    let btn_w = (panel_width - 10.0) / 2.0;
    let mut clicked = None;
    Grid::new("answer_options")
        .num_columns(2)
        .spacing([10.0, 10.0])
        .show(ui, |ui| {
            for (i, option) in options.iter().enumerate() {
                if ui
                    .add_sized([btn_w, 40.0], Button::new(option.as_str()))
                    .clicked()
                {
                    clicked = Some(i);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    clicked
}
