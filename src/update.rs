//! Per-frame update: feeds one frame of host input through the engine.

use crate::editable::TextEditEngine;
use crate::input::{key_to_msg, InputSource, Key};
use crate::platform::{Clipboard, TextMetrics};

impl TextEditEngine {
    /// Advance one frame.
    ///
    /// Order within a frame: pointer press/drag/release, wheel, then (only
    /// while focused) repeating keys followed by typed characters.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        metrics: &dyn TextMetrics,
        clipboard: &mut dyn Clipboard,
    ) {
        self.frame += 1;
        self.set_line_height(metrics.line_height());

        let (x, y) = input.pointer();
        let mods = input.modifiers();

        if input.button_pressed() {
            self.pointer_pressed(x, y, mods.shift(), metrics);
        } else if input.button_held() {
            self.pointer_dragged(x, y, metrics);
        }
        if input.button_released() {
            self.pointer_released();
        }

        let wheel = input.wheel_delta();
        if wheel != 0.0 && self.bounds.contains(x, y) {
            let amount = self.wheel_remainder - wheel * self.config.wheel_lines as f64;
            let lines = amount.round();
            self.wheel_remainder = amount - lines;
            if lines != 0.0 {
                self.scroll_by(lines as isize);
            }
        }

        if !self.focused {
            return;
        }

        for key in Key::ALL {
            if !self.repeat.poll(key, input.key_held(key)) {
                continue;
            }
            let Some(msg) = key_to_msg(key, mods) else {
                continue;
            };
            if let Err(e) = self.apply(msg, clipboard) {
                tracing::warn!("Clipboard operation failed: {}", e);
            }
        }

        if mods.suppresses_typing() {
            return;
        }
        for &ch in input.typed_chars() {
            if !ch.is_control() {
                self.insert_char(ch);
            }
        }
    }
}
