//! UI Command Handler

use super::state::App;
use crate::events::{LogicCommand, UiCommand};

impl App {
    /// Dispatches UI commands; the single entry point for user actions
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));

        match command {
            UiCommand::SortByFirstName => self.handle_sort_by_first_name(),
            UiCommand::ToggleFilterByPhone => self.handle_toggle_filter(),
        }
    }

    /// Sorts the list currently on screen; never fetches
    fn handle_sort_by_first_name(&mut self) {
        self.view.sort_by_first_name();
        self.logger.info(&format!(
            "[UI] Sorted {} user(s) by first name",
            self.view.users().len()
        ));
    }

    /// Flips the phone filter, then reloads with the new flag
    fn handle_toggle_filter(&mut self) {
        let enabled = self.view.toggle_filter();
        self.logger
            .info(&format!("[UI] Phone filter {}", if enabled { "on" } else { "off" }));
        self.request_users();
    }

    /// Issues a fetch with the current filter snapshot.
    /// Earlier requests are not cancelled.
    pub(super) fn request_users(&mut self) {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let filter = self.view.phone_filter();

        match self
            .logic_cmd_tx
            .send(LogicCommand::FetchUsers { request_id, filter })
        {
            Ok(()) => {
                self.in_flight += 1;
                self.logger
                    .debug(&format!("[UI] Fetch #{} requested", request_id));
            }
            Err(_) => self
                .logger
                .error("[UI] Logic thread is not running, fetch dropped"),
        }
    }
}
