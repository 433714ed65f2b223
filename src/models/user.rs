//! Community member model matching the frontend User interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Role a member holds on the platform.
    UserRole {
        Student => "student",
        Professional => "professional",
        Expert => "expert",
        Admin => "admin",
    }
}

/// A community member. Content records embed a copy of their author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    pub verified: bool,
    pub joined_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl User {
    /// Name followed by the affiliation, when known.
    pub fn byline(&self) -> String {
        match &self.affiliation {
            Some(affiliation) => format!("{} ({})", self.name, affiliation),
            None => self.name.clone(),
        }
    }
}
