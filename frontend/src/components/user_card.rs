//! User Card Component
//!
//! Card with avatar, display name, email and phone number of one user.

use super::UserAvatar;
use crate::models::UserRecord;
use egui::{Color32, Margin, RichText};

const FILL: Color32 = Color32::from_rgb(30, 41, 59);
const BORDER: Color32 = Color32::from_rgb(51, 65, 85);
const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
const MUTED: Color32 = Color32::from_rgb(148, 163, 184);

/// Horizontal + vertical inner margin of the card frame
const INNER_MARGIN: i8 = 12;

/// User card component
pub struct UserCard<'a> {
    user: &'a UserRecord,
    width: f32,
}

impl<'a> UserCard<'a> {
    pub fn new(user: &'a UserRecord) -> Self {
        Self { user, width: 200.0 }
    }

    /// Outer width of the card, margins included
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let inner_width = (self.width - 2.0 * INNER_MARGIN as f32 - 2.0).max(0.0);

        egui::Frame::new()
            .fill(FILL)
            .stroke(egui::Stroke::new(1.0, BORDER))
            .corner_radius(8.0)
            .inner_margin(Margin::same(INNER_MARGIN))
            .show(ui, |ui| {
                ui.set_width(inner_width);

                let initial = self.user.initial();
                ui.horizontal(|ui| {
                    UserAvatar::new(&initial, &self.user.id).size(40.0).show(ui);
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            RichText::new(self.user.display_name())
                                .size(16.0)
                                .strong()
                                .color(TEXT),
                        )
                        .truncate(),
                    );
                });

                ui.add_space(8.0);

                if let Some(email) = self.user.email.as_deref() {
                    ui.add(
                        egui::Label::new(RichText::new(format!("✉ {}", email)).size(12.0).color(MUTED))
                            .truncate(),
                    );
                }

                let phone = match self.user.phone_number.as_deref() {
                    Some(phone) if !phone.is_empty() => format!("☎ {}", phone),
                    _ => "No phone number".to_string(),
                };
                ui.label(RichText::new(phone).size(12.0).color(MUTED));
            })
            .response
    }
}
