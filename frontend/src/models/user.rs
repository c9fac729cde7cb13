//! User Record DTO
//!
//! A user profile as returned by the Hexlabs Users service. Only the fields
//! the viewer shows are decoded; everything else in the payload is ignored.

use serde::Deserialize;

/// Name block of a user profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserName {
    pub first: String,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub preferred: Option<String>,
}

/// A user profile owned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: UserName,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRecord {
    /// Preferred name when set, otherwise first name, followed by the last name
    pub fn display_name(&self) -> String {
        let given = self
            .name
            .preferred
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(&self.name.first);

        match self.name.last.as_deref() {
            Some(last) if !last.trim().is_empty() => format!("{} {}", given, last),
            _ => given.to_string(),
        }
    }

    /// Upper-cased first character of the display name, `?` when empty
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// True when the phone number is present and starts with `prefix`
    pub fn phone_starts_with(&self, prefix: &str) -> bool {
        self.phone_number
            .as_deref()
            .is_some_and(|phone| phone.starts_with(prefix))
    }
}

#[cfg(test)]
pub(crate) fn user(id: &str, first: &str, phone: Option<&str>) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: UserName {
            first: first.to_string(),
            ..Default::default()
        },
        phone_number: phone.map(str::to_string),
        email: None,
    }
}
