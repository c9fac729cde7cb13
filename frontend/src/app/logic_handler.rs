//! Handles events from the background logic thread.

use super::state::App;
use crate::events::LogicEvent;
use crate::infrastructure::FetchError;
use crate::models::{UserRecord, duplicate_ids};

impl App {
    /// Applies a fetch outcome. Results are applied in arrival order, so a
    /// slow older request can overwrite a newer one.
    pub(super) fn handle_logic_event(&mut self, event: LogicEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            LogicEvent::UsersLoaded { request_id, users } => {
                self.handle_users_loaded(request_id, users);
            }
            LogicEvent::UsersLoadFailed { request_id, error } => {
                self.handle_users_load_failed(request_id, error);
            }
        }
    }

    fn handle_users_loaded(&mut self, request_id: u64, users: Vec<UserRecord>) {
        if request_id < self.next_request_id {
            self.logger.debug(&format!(
                "[APP] Applying #{} although #{} was issued later",
                request_id, self.next_request_id
            ));
        }

        let duplicates = duplicate_ids(&users);
        if !duplicates.is_empty() {
            self.logger.warn(&format!(
                "[APP] Duplicate user ids in response #{}: {}",
                request_id,
                duplicates.join(", ")
            ));
        }

        self.logger.info(&format!(
            "[APP] Showing {} user(s) from #{}",
            users.len(),
            request_id
        ));
        self.view.replace_users(users);
    }

    /// The list on screen is left untouched.
    fn handle_users_load_failed(&mut self, request_id: u64, error: FetchError) {
        self.logger.error(&format!(
            "[APP] Fetch #{} failed (phone filter {}), keeping {} user(s): {}",
            request_id,
            if self.view.filter_by_phone() { "on" } else { "off" },
            self.view.users().len(),
            error
        ));
    }
}
