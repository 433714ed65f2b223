//! Subject connection model matching the frontend SubjectConnection interface.

use serde::{Deserialize, Serialize};

use super::Record;

/// How a university subject relates to other subjects, applications and careers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConnection {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub related_subjects: Vec<String>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub career_paths: Vec<String>,
    pub description: String,
}

impl Record for SubjectConnection {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        self.subject.clone()
    }

    fn lead_text(&self) -> &str {
        &self.description
    }
}
