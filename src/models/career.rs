//! Career path models matching the frontend CareerPath interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, User};

/// An engineering career track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub discipline: String,
    pub overview: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    pub salary_range: String,
    pub growth_outlook: String,
    pub education_required: String,
    #[serde(default)]
    pub experience_stories: Vec<ExperienceStory>,
}

/// A first-hand account from someone working on a career path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceStory {
    pub id: String,
    pub author: User,
    pub career_path_id: String,
    pub title: String,
    pub content: String,
    pub current_position: String,
    pub years_of_experience: u32,
    pub created_at: DateTime<Utc>,
}

impl Record for CareerPath {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn lead_text(&self) -> &str {
        &self.overview
    }
}
