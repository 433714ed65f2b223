//! Industry insight model matching the frontend IndustryInsight interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Record, User};

/// An article from an industry practitioner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsight {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub content: String,
    pub author: User,
    pub discipline: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub helpful: u32,
}

impl Record for IndustryInsight {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn lead_text(&self) -> &str {
        &self.content
    }
}
