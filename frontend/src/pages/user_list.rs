//! User list page
//!
//! Holds the list currently on screen and the phone filter flag, and draws
//! the header, the two action buttons and the card grid.

use crate::components::{Button, ButtonVariant, EmptyState, UserGrid, grid_columns};
use crate::events::UiCommand;
use crate::models::{PhoneFilter, UserRecord, sorted_by_first_name};
use egui::{Color32, RichText, Vec2};

pub const PAGE_TITLE: &str = "Hexlabs Users";
const PAGE_SUBTITLE: &str =
    "This is an example of a page that makes an API call to the Hexlabs API to get a list of users.";

/// Share of the window width used by the page content
const CONTENT_WIDTH_RATIO: f32 = 0.9;
const TOP_PADDING: f32 = 32.0;
const GRID_PADDING: f32 = 40.0;
const CARD_SPACING: f32 = 24.0;

/// What the last frame drew: grid columns and number of cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub cards: usize,
}

/// View state of the user list page
pub struct UserListView {
    users: Vec<UserRecord>,
    filter_by_phone: bool,
    phone_prefix: String,
}

impl UserListView {
    pub fn new(phone_prefix: impl Into<String>) -> Self {
        Self {
            users: Vec::new(),
            filter_by_phone: false,
            phone_prefix: phone_prefix.into(),
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn filter_by_phone(&self) -> bool {
        self.filter_by_phone
    }

    /// Filter snapshot to send with the next fetch
    pub fn phone_filter(&self) -> PhoneFilter {
        PhoneFilter::new(self.filter_by_phone, self.phone_prefix.clone())
    }

    /// Replaces the whole list with a fetch result
    pub fn replace_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    pub fn sort_by_first_name(&mut self) {
        self.users = sorted_by_first_name(&self.users);
    }

    /// Flips the filter flag and returns the new value
    pub fn toggle_filter(&mut self) -> bool {
        self.filter_by_phone = !self.filter_by_phone;
        self.filter_by_phone
    }

    /// Renders the page and returns any UI command along with the grid
    /// layout that was drawn
    pub fn show(&self, ctx: &egui::Context) -> (Option<UiCommand>, GridLayout) {
        let mut output = (None, GridLayout::default());

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    output = self.show_contents(ui);
                });
        });

        output
    }

    /// Draws the page body into `ui`.
    ///
    /// Columns follow the viewport width, not the width left for the grid.
    pub fn show_contents(&self, ui: &mut egui::Ui) -> (Option<UiCommand>, GridLayout) {
        let columns = grid_columns(ui.ctx().screen_rect().width());
        let available = ui.available_width();
        let content_width = available * CONTENT_WIDTH_RATIO;
        let margin = (available - content_width) / 2.0;

        ui.horizontal_top(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(content_width);
                ui.add_space(TOP_PADDING);

                self.show_header(ui);
                ui.add_space(12.0);

                let command = self.show_actions(ui);
                ui.add_space(GRID_PADDING);

                let cards = if self.users.is_empty() {
                    self.show_empty_state(ui);
                    0
                } else {
                    UserGrid::new(&self.users)
                        .columns(columns)
                        .spacing(CARD_SPACING)
                        .show(ui)
                        .len()
                };

                ui.add_space(GRID_PADDING);
                (command, GridLayout { columns, cards })
            })
            .inner
        })
        .inner
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(PAGE_TITLE)
                .size(36.0)
                .strong()
                .color(Color32::from_rgb(226, 232, 240)),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new(PAGE_SUBTITLE)
                .size(24.0)
                .color(Color32::from_rgb(148, 163, 184)),
        );
    }

    fn show_actions(&self, ui: &mut egui::Ui) -> Option<UiCommand> {
        let mut command = None;

        ui.horizontal_wrapped(|ui| {
            if Button::new("Sort users by first name")
                .min_size(Vec2::new(0.0, 36.0))
                .show(ui)
                .clicked()
            {
                command = Some(UiCommand::SortByFirstName);
            }

            ui.add_space(8.0);

            let label = format!(
                "Only include phone numbers starting with {}",
                self.phone_prefix
            );
            if Button::new(label)
                .variant(ButtonVariant::toggle(self.filter_by_phone))
                .min_size(Vec2::new(0.0, 36.0))
                .show(ui)
                .clicked()
            {
                command = Some(UiCommand::ToggleFilterByPhone);
            }
        });

        command
    }

    fn show_empty_state(&self, ui: &mut egui::Ui) {
        let hint = if self.filter_by_phone {
            format!("No phone numbers start with {}", self.phone_prefix)
        } else {
            "Users appear here once the list is loaded".to_string()
        };

        EmptyState::new("👥", "No users to show").hint(hint).show(ui);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user;

    fn render(view: &UserListView) -> (Option<UiCommand>, usize) {
        let ctx = egui::Context::default();
        let mut output = (None, GridLayout::default());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                output = view.show_contents(ui);
            });
        });
        (output.0, output.1.cards)
    }

    /// Runs one full frame of the page in a window `width` points wide
    fn render_window(view: &UserListView, width: f32) -> GridLayout {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 900.0),
            )),
            ..Default::default()
        };

        let mut layout = GridLayout::default();
        let _ = ctx.run(input, |ctx| {
            layout = view.show(ctx).1;
        });
        layout
    }

    fn ten_users() -> Vec<UserRecord> {
        (0..10)
            .map(|i| user(&i.to_string(), &format!("User{}", i), None))
            .collect()
    }

    #[test]
    fn test_renders_one_card_per_user() {
        let mut view = UserListView::new("470");
        view.replace_users(vec![
            user("1", "Bob", None),
            user("2", "Alice", Some("4705550000")),
            user("3", "Cy", None),
        ]);

        let (command, cards) = render(&view);
        assert_eq!(cards, 3);
        assert_eq!(command, None);
    }

    #[test]
    fn test_empty_list_renders_zero_cards() {
        let view = UserListView::new("470");
        assert_eq!(render(&view).1, 0);
    }

    #[test]
    fn test_sort_replaces_list() {
        let mut view = UserListView::new("470");
        view.replace_users(vec![user("b", "Bob", None), user("a", "Alice", None)]);

        view.sort_by_first_name();
        let names: Vec<String> = view.users().iter().map(|u| u.name.first.clone()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        view.sort_by_first_name();
        let again: Vec<String> = view.users().iter().map(|u| u.name.first.clone()).collect();
        assert_eq!(again, names);
    }

    #[test]
    fn test_columns_follow_window_width() {
        let mut view = UserListView::new("470");
        view.replace_users(ten_users());

        // The grid itself is narrower than the window at both sizes
        let small = render_window(&view, 520.0);
        assert_eq!(small.columns, 3);
        assert_eq!(small.cards, 10);

        let medium = render_window(&view, 800.0);
        assert_eq!(medium.columns, 5);
        assert_eq!(medium.cards, 10);

        assert_eq!(render_window(&view, 400.0).columns, 2);
    }

    #[test]
    fn test_empty_page_reports_columns() {
        let view = UserListView::new("470");
        let layout = render_window(&view, 1000.0);
        assert_eq!(layout, GridLayout { columns: 5, cards: 0 });
    }

    #[test]
    fn test_toggle_filter_updates_snapshot() {
        let mut view = UserListView::new("678");
        assert!(!view.phone_filter().enabled);

        assert!(view.toggle_filter());
        assert_eq!(view.phone_filter(), PhoneFilter::new(true, "678"));

        assert!(!view.toggle_filter());
        assert!(!view.filter_by_phone());
    }
}
