use crate::models::PhoneFilter;

/// Commands sent from the UI thread to the logic thread
#[derive(Debug, Clone)]
pub enum LogicCommand {
    /// Fetch the user list and apply `filter` to the response.
    /// `request_id` is echoed back in the resulting event.
    FetchUsers { request_id: u64, filter: PhoneFilter },
}
