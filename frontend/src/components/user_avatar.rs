//! User Avatar Component
//!
//! Filled circle with the user's initial. The colour is derived from the
//! user id so a given user keeps the same colour across reloads and sorts.

use egui::{Align2, Color32, FontId, Sense, Vec2};

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(16, 185, 129),
    Color32::from_rgb(245, 158, 11),
    Color32::from_rgb(239, 68, 68),
    Color32::from_rgb(139, 92, 246),
    Color32::from_rgb(236, 72, 153),
];

pub struct UserAvatar<'a> {
    initial: &'a str,
    color: Color32,
    size: f32,
}

impl<'a> UserAvatar<'a> {
    pub fn new(initial: &'a str, seed: &str) -> Self {
        Self {
            initial,
            color: color_for(seed),
            size: 40.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.circle_filled(rect.center(), self.size / 2.0, self.color);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.initial,
                FontId::proportional(self.size * 0.45),
                Color32::WHITE,
            );
        }

        response
    }
}

/// Stable palette pick for `seed`
pub(crate) fn color_for(seed: &str) -> Color32 {
    let sum = seed
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    PALETTE[sum % PALETTE.len()]
}
