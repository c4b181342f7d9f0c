// src/ui/helpers.rs
use crate::app::KeyPress;
use egui::{Button, Color32, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

// Disposición del teclado original: 1-9, C, 0, backspace.
const KEYPAD: [(&str, KeyPress); 12] = [
    ("1", KeyPress::Digit('1')),
    ("2", KeyPress::Digit('2')),
    ("3", KeyPress::Digit('3')),
    ("4", KeyPress::Digit('4')),
    ("5", KeyPress::Digit('5')),
    ("6", KeyPress::Digit('6')),
    ("7", KeyPress::Digit('7')),
    ("8", KeyPress::Digit('8')),
    ("9", KeyPress::Digit('9')),
    ("C", KeyPress::Clear),
    ("0", KeyPress::Digit('0')),
    ("⌫", KeyPress::Backspace),
];

/// Teclado numérico en pantalla, 3 columnas. Devuelve la tecla pulsada.
pub fn keypad(ui: &mut Ui, panel_width: f32, key_height: f32) -> Option<KeyPress> {
    let gap = 8.0;
    let key_w = (panel_width - 2.0 * gap) / 3.0;
    let mut pressed = None;

    for row in KEYPAD.chunks(3) {
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - panel_width) / 2.0);
            for (label, key) in row.iter().copied() {
                let action = !matches!(key, KeyPress::Digit(_));
                let mut btn = Button::new(label).min_size(Vec2::new(key_w, key_height));
                if action {
                    btn = btn.fill(Color32::from_rgb(70, 100, 150));
                }
                if ui.add(btn).clicked() {
                    pressed = Some(key);
                }
            }
        });
        ui.add_space(4.0);
    }
    pressed
}
