// src/ui/helpers.rs
use crate::model::Difficulty;
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Una fila con un botón por dificultad. Devuelve la pulsada, si alguna.
pub fn difficulty_row(ui: &mut Ui, total_width: f32, height: f32) -> Option<Difficulty> {
    let gap = 8.0;
    let n = Difficulty::ALL.len() as f32;
    let btn_w = ((total_width - gap * (n - 1.0)) / n).max(80.0);
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - total_width) / 2.0).max(0.0));
        for level in Difficulty::ALL {
            if ui
                .add_sized([btn_w, height], Button::new(level.label()))
                .clicked()
            {
                picked = Some(level);
            }
        }
    });
    picked
}
