//! EmptyState Component
//!
//! Centered placeholder shown when a list has nothing to display.

use egui::{Color32, RichText, Ui};

pub struct EmptyState {
    icon: String,
    title: String,
    hint: Option<String>,
}

impl EmptyState {
    pub fn new(icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            hint: None,
        }
    }

    /// Smaller line under the title
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }

    pub fn show(self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(RichText::new(self.icon).size(40.0));
            ui.add_space(12.0);
            ui.label(
                RichText::new(self.title)
                    .size(18.0)
                    .color(Color32::from_rgb(156, 163, 175)),
            );

            if let Some(hint) = self.hint {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(hint)
                        .size(14.0)
                        .color(Color32::from_rgb(107, 114, 128)),
                );
            }

            ui.add_space(48.0);
        });
    }
}
