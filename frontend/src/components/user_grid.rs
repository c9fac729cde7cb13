//! User Grid Component
//!
//! Lays user cards out in rows whose column count depends on the viewport
//! width. Card width is whatever the grid's parent leaves available.

use super::UserCard;
use crate::models::UserRecord;

/// Below this width the grid uses 2 columns
pub const SMALL_BREAKPOINT: f32 = 480.0;
/// Below this width (and above `SMALL_BREAKPOINT`) the grid uses 3 columns
pub const MEDIUM_BREAKPOINT: f32 = 768.0;

/// Column count for a viewport `width` points wide: 2, 3 or 5
pub fn grid_columns(width: f32) -> usize {
    if width < SMALL_BREAKPOINT {
        2
    } else if width < MEDIUM_BREAKPOINT {
        3
    } else {
        5
    }
}

pub struct UserGrid<'a> {
    users: &'a [UserRecord],
    spacing: f32,
    columns: Option<usize>,
}

impl<'a> UserGrid<'a> {
    pub fn new(users: &'a [UserRecord]) -> Self {
        Self {
            users,
            spacing: 24.0,
            columns: None,
        }
    }

    /// Fixes the column count instead of deriving it from the viewport
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns.max(1));
        self
    }

    /// Gap between cards, both directions
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Draws one card per user and returns the egui id of each card, in
    /// display order. Card ids are salted with the user id.
    pub fn show(self, ui: &mut egui::Ui) -> Vec<egui::Id> {
        let columns = self
            .columns
            .unwrap_or_else(|| grid_columns(ui.ctx().screen_rect().width()));
        let gaps = self.spacing * (columns - 1) as f32;
        let card_width = ((ui.available_width() - gaps) / columns as f32).max(0.0);

        let mut card_ids = Vec::with_capacity(self.users.len());

        for row in self.users.chunks(columns) {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = self.spacing;

                for user in row {
                    let id = ui
                        .push_id(&user.id, |ui| {
                            UserCard::new(user).width(card_width).show(ui);
                            ui.id()
                        })
                        .inner;
                    card_ids.push(id);
                }
            });
            ui.add_space(self.spacing);
        }

        card_ids
    }
}
