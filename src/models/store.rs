//! Content store model: the root document holding every vertical's records.

use serde::{Deserialize, Serialize};

use super::{
    CareerPath, ForumPost, IndustryInsight, Job, Scholarship, StartupResource, SubjectConnection,
    UniversityProgram, User,
};

/// The root document containing all portal content.
///
/// Collections keep the order they had in the source document; listings never
/// reorder them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentStore {
    pub schema_version: i32,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub forum_posts: Vec<ForumPost>,
    #[serde(default)]
    pub university_programs: Vec<UniversityProgram>,
    #[serde(default)]
    pub career_paths: Vec<CareerPath>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub scholarships: Vec<Scholarship>,
    #[serde(default)]
    pub industry_insights: Vec<IndustryInsight>,
    #[serde(default)]
    pub subject_connections: Vec<SubjectConnection>,
    #[serde(default)]
    pub startup_resources: Vec<StartupResource>,
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub users: usize,
    pub forum_posts: usize,
    pub university_programs: usize,
    pub career_paths: usize,
    pub jobs: usize,
    pub scholarships: usize,
    pub industry_insights: usize,
    pub subject_connections: usize,
    pub startup_resources: usize,
}

impl ContentStore {
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            forum_posts: self.forum_posts.len(),
            university_programs: self.university_programs.len(),
            career_paths: self.career_paths.len(),
            jobs: self.jobs.len(),
            scholarships: self.scholarships.len(),
            industry_insights: self.industry_insights.len(),
            subject_connections: self.subject_connections.len(),
            startup_resources: self.startup_resources.len(),
        }
    }
}
