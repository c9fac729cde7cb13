use crate::infrastructure::FetchError;
use crate::models::UserRecord;

/// Events sent from the logic thread back to the UI thread
#[derive(Debug, Clone)]
pub enum LogicEvent {
    /// A fetch completed; `users` is already filtered
    UsersLoaded {
        request_id: u64,
        users: Vec<UserRecord>,
    },
    /// A fetch failed; the current list must be left as is
    UsersLoadFailed { request_id: u64, error: FetchError },
}
