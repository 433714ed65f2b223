//! Forum models matching the frontend ForumPost and Reply interfaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, User};

closed_enum! {
    /// Board a forum post is filed under.
    ForumCategory {
        GeneralDiscussion => "General Discussion",
        CareerGuidance => "Career Guidance",
        TechnicalQuestions => "Technical Questions",
        IndustryInsights => "Industry Insights",
        Academia => "Academia",
        Startups => "Startups",
        JobOpportunities => "Job Opportunities",
        Scholarships => "Scholarships",
    }
}

/// A discussion thread in the community forum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: User,
    pub category: ForumCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub replies: u32,
    #[serde(default)]
    pub views: u32,
}

/// A reply to a forum post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

impl Record for ForumPost {
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
