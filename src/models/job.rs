//! Job listing model matching the frontend Job interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

closed_enum! {
    /// Employment type of a job listing.
    JobType {
        FullTime => "Full-time",
        PartTime => "Part-time",
        Contract => "Contract",
        Internship => "Internship",
    }
}

closed_enum! {
    /// Seniority a job listing asks for.
    ExperienceLevel {
        Entry => "Entry",
        Mid => "Mid",
        Senior => "Senior",
        Lead => "Lead",
    }
}

/// An engineering job opening.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub discipline: String,
    pub experience_level: ExperienceLevel,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub posted_date: NaiveDate,
    pub application_url: String,
}

impl Record for Job {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }

    fn lead_text(&self) -> &str {
        &self.description
    }
}
