//! Data models for the application
//!
//! Plain data decoded from the Users service plus the pure list operations
//! the view applies to it.

mod user;
mod user_list;

pub use user::UserRecord;
pub use user_list::{DEFAULT_PHONE_PREFIX, PhoneFilter, duplicate_ids, sorted_by_first_name};

#[cfg(test)]
pub(crate) use user::user;
