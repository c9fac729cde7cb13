//! User list operations
//!
//! Pure transformations behind the list view: the phone-prefix filter, the
//! first-name sort and duplicate-id detection.

use super::UserRecord;
use std::collections::HashSet;

/// Prefix matched by the phone filter unless configured otherwise
pub const DEFAULT_PHONE_PREFIX: &str = "470";

/// Snapshot of the phone filter taken when a fetch is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFilter {
    pub enabled: bool,
    pub prefix: String,
}

impl PhoneFilter {
    pub fn new(enabled: bool, prefix: impl Into<String>) -> Self {
        Self {
            enabled,
            prefix: prefix.into(),
        }
    }

    /// Keeps records whose phone number starts with the prefix.
    /// Records without a phone number are dropped. Disabled filters pass
    /// everything through in the original order.
    pub fn apply(&self, users: Vec<UserRecord>) -> Vec<UserRecord> {
        if !self.enabled {
            return users;
        }

        users
            .into_iter()
            .filter(|user| user.phone_starts_with(&self.prefix))
            .collect()
    }
}

/// Returns a copy ordered by `name.first` (byte-wise, ascending).
/// Ties keep their relative order.
pub fn sorted_by_first_name(users: &[UserRecord]) -> Vec<UserRecord> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| a.name.first.cmp(&b.name.first));
    sorted
}

/// Ids that appear more than once, in first-repeat order
pub fn duplicate_ids(users: &[UserRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for user in users {
        let id = user.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::user;

    fn first_names(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.name.first.as_str()).collect()
    }

    fn mixed_users() -> Vec<UserRecord> {
        vec![
            user("1", "Dana", Some("4705550001")),
            user("2", "Eli", Some("4045550002")),
            user("3", "Fay", None),
            user("4", "Gus", Some("470-555-0004")),
            user("5", "Hal", Some("")),
        ]
    }

    #[test]
    fn test_filter_keeps_only_prefix_matches() {
        let filtered = PhoneFilter::new(true, DEFAULT_PHONE_PREFIX).apply(mixed_users());
        assert_eq!(first_names(&filtered), vec!["Dana", "Gus"]);
    }

    #[test]
    fn test_filter_disabled_passes_through() {
        let filtered = PhoneFilter::new(false, DEFAULT_PHONE_PREFIX).apply(mixed_users());
        assert_eq!(filtered, mixed_users());
    }

    #[test]
    fn test_filter_custom_prefix() {
        let filtered = PhoneFilter::new(true, "404").apply(mixed_users());
        assert_eq!(first_names(&filtered), vec!["Eli"]);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(PhoneFilter::new(true, "470").apply(Vec::new()).is_empty());
    }

    #[test]
    fn test_sort_by_first_name() {
        let users = vec![user("b", "Bob", None), user("a", "Alice", None)];
        let sorted = sorted_by_first_name(&users);

        assert_eq!(first_names(&sorted), vec!["Alice", "Bob"]);
        // Input untouched
        assert_eq!(first_names(&users), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let users = vec![
            user("1", "Carol", None),
            user("2", "alice", None),
            user("3", "Bob", None),
        ];
        let once = sorted_by_first_name(&users);
        let twice = sorted_by_first_name(&once);

        assert_eq!(once, twice);
        // Upper case sorts before lower case
        assert_eq!(first_names(&once), vec!["Bob", "Carol", "alice"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let users = vec![
            user("x", "Sam", None),
            user("a", "Ann", None),
            user("y", "Sam", None),
            user("z", "Sam", None),
        ];
        let sorted = sorted_by_first_name(&users);
        let ids: Vec<&str> = sorted.iter().map(|u| u.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "x", "y", "z"]);
    }

    #[test]
    fn test_duplicate_ids() {
        let users = vec![
            user("1", "A", None),
            user("2", "B", None),
            user("1", "C", None),
            user("1", "D", None),
            user("2", "E", None),
        ];
        assert_eq!(duplicate_ids(&users), vec!["1", "2"]);
        assert!(duplicate_ids(&mixed_users()).is_empty());
    }
}
