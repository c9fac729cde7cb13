//! Button Component
//!
//! Filled buttons with a fixed palette.

use egui::{Color32, FontId, RichText, Vec2};

/// Button fill styles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Default action (blue)
    Primary,
    /// Toggle in its "off" state (gray)
    Neutral,
    /// Toggle in its "on" state (green)
    Active,
}

impl ButtonVariant {
    /// Picks `Active` or `Neutral` for a toggle button
    pub fn toggle(on: bool) -> Self {
        if on {
            ButtonVariant::Active
        } else {
            ButtonVariant::Neutral
        }
    }

    fn fill(&self) -> Color32 {
        match self {
            ButtonVariant::Primary => Color32::from_rgb(59, 130, 246),
            ButtonVariant::Neutral => Color32::from_rgb(75, 85, 99),
            ButtonVariant::Active => Color32::from_rgb(34, 197, 94),
        }
    }
}

/// A filled button with rounded corners
pub struct Button {
    text: String,
    text_size: f32,
    min_size: Option<Vec2>,
    variant: ButtonVariant,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            text_size: 16.0,
            min_size: None,
            variant: ButtonVariant::Primary,
        }
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Renders the button and returns the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let mut button = egui::Button::new(
            RichText::new(&self.text)
                .font(FontId::proportional(self.text_size))
                .color(Color32::WHITE),
        )
        .fill(self.variant.fill())
        .corner_radius(6.0);

        if let Some(size) = self.min_size {
            button = button.min_size(size);
        }

        ui.add(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_variant() {
        assert_eq!(ButtonVariant::toggle(true), ButtonVariant::Active);
        assert_eq!(ButtonVariant::toggle(false), ButtonVariant::Neutral);
        assert_ne!(
            ButtonVariant::Active.fill(),
            ButtonVariant::Neutral.fill()
        );
    }
}
