//! Profile Identity
//!
//! The user's base facts, shared by every renderer.

use serde::{Deserialize, Serialize};

/// Base profile facts. Every field is optional; an empty string counts as unset.
///
/// The same shape doubles as a partial update: see [`ProfileIdentity::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileIdentity {
    /// Shallow merge: provided fields overwrite, omitted fields persist.
    /// No validation is applied; empty strings are accepted as-is.
    pub fn merge(&mut self, patch: ProfileIdentity) {
        let ProfileIdentity {
            name,
            username,
            title,
            description,
            location,
            website,
            email,
            avatar,
        } = patch;

        if name.is_some() {
            self.name = name;
        }
        if username.is_some() {
            self.username = username;
        }
        if title.is_some() {
            self.title = title;
        }
        if description.is_some() {
            self.description = description;
        }
        if location.is_some() {
            self.location = location;
        }
        if website.is_some() {
            self.website = website;
        }
        if email.is_some() {
            self.email = email;
        }
        if avatar.is_some() {
            self.avatar = avatar;
        }
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn avatar(&self) -> Option<&str> {
        non_empty(&self.avatar)
    }

    /// Heading name: `name`, then `username`, then "Developer"
    pub fn display_name(&self) -> &str {
        self.name()
            .or_else(|| self.username())
            .unwrap_or("Developer")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_shallow() {
        let mut identity = ProfileIdentity {
            name: Some("Ada".to_string()),
            username: Some("ada".to_string()),
            ..Default::default()
        };
        identity.merge(ProfileIdentity {
            username: Some("lovelace".to_string()),
            ..Default::default()
        });
        assert_eq!(identity.name(), Some("Ada"));
        assert_eq!(identity.username(), Some("lovelace"));
    }

    #[test]
    fn test_empty_string_is_accepted_and_reads_as_unset() {
        let mut identity = ProfileIdentity {
            username: Some("ada".to_string()),
            ..Default::default()
        };
        identity.merge(ProfileIdentity {
            username: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(identity.username, Some(String::new()));
        assert_eq!(identity.username(), None);
    }

    #[test]
    fn test_display_name_fallback() {
        let mut identity = ProfileIdentity::default();
        assert_eq!(identity.display_name(), "Developer");
        identity.username = Some("octocat".to_string());
        assert_eq!(identity.display_name(), "octocat");
        identity.name = Some("The Octocat".to_string());
        assert_eq!(identity.display_name(), "The Octocat");
    }
}
