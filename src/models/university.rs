//! University program models matching the frontend UniversityProgram interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, User};

closed_enum! {
    /// Degree awarded by a program.
    Degree {
        Bs => "BS",
        Ms => "MS",
        Phd => "PhD",
        Diploma => "Diploma",
    }
}

/// An engineering degree program with its community reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UniversityProgram {
    pub id: String,
    pub university_name: String,
    pub program_name: String,
    pub degree: Degree,
    pub discipline: String,
    pub location: String,
    #[serde(default)]
    pub accreditation: Vec<String>,
    pub duration: String,
    pub overview: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<ProgramReview>,
    pub average_rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employability_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_opportunities: Option<bool>,
}

/// A graduate's or student's review of a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramReview {
    pub id: String,
    pub program_id: String,
    pub author: User,
    pub rating: f32,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub helpful: u32,
}

impl Record for UniversityProgram {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        format!("{} - {}", self.program_name, self.university_name)
    }

    fn lead_text(&self) -> &str {
        &self.overview
    }
}
