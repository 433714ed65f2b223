//! Listing definitions for each content vertical.
//!
//! Which fields a page searches, which selectors it shows and what it says when
//! nothing matches.

use crate::models::{
    CareerPath, ForumCategory, ForumPost, IndustryInsight, Job, JobType, Scholarship,
    ScholarshipLevel, StartupCategory, StartupResource, SubjectConnection, UniversityProgram,
};
use crate::query::Listing;

/// Disciplines offered by the university program selector.
pub const UNIVERSITY_DISCIPLINES: &[&str] = &[
    "Electrical Engineering",
    "Mechanical Engineering",
    "Computer Engineering",
    "Civil Engineering",
    "Software Engineering",
];

pub fn forum_posts() -> Listing<ForumPost> {
    Listing::<ForumPost>::new()
        .search_field(|post| Some(post.title.as_str()))
        .search_field(|post| Some(post.content.as_str()))
        .axis("category", ForumCategory::LABELS, |post| {
            Some(post.category.as_str())
        })
}

pub fn university_programs() -> Listing<UniversityProgram> {
    Listing::<UniversityProgram>::new()
        .search_field(|program| Some(program.university_name.as_str()))
        .search_field(|program| Some(program.program_name.as_str()))
        .axis("discipline", UNIVERSITY_DISCIPLINES, |program| {
            Some(program.discipline.as_str())
        })
}

pub fn jobs() -> Listing<Job> {
    Listing::<Job>::new()
        .search_field(|job| Some(job.title.as_str()))
        .search_field(|job| Some(job.company.as_str()))
        .search_field(|job| Some(job.location.as_str()))
        .axis("type", JobType::LABELS, |job| Some(job.job_type.as_str()))
}

pub fn scholarships() -> Listing<Scholarship> {
    Listing::<Scholarship>::new()
        .search_field(|scholarship| Some(scholarship.name.as_str()))
        .search_field(|scholarship| Some(scholarship.provider.as_str()))
        .search_field(|scholarship| Some(scholarship.country.as_str()))
        .axis("level", ScholarshipLevel::LABELS, |scholarship| {
            Some(scholarship.level.as_str())
        })
}

/// Startup resources are browsed by category only.
pub fn startup_resources() -> Listing<StartupResource> {
    Listing::<StartupResource>::new().axis("category", StartupCategory::LABELS, |resource| {
        Some(resource.category.as_str())
    })
}

// Pages below list everything; they have no search input or selector.

pub fn career_paths() -> Listing<CareerPath> {
    Listing::new()
}

pub fn industry_insights() -> Listing<IndustryInsight> {
    Listing::new()
}

pub fn subject_connections() -> Listing<SubjectConnection> {
    Listing::new()
}

pub const FORUM_EMPTY: &str = "No discussions found. Try adjusting your search or filters.";
pub const UNIVERSITIES_EMPTY: &str = "No programs found. Try adjusting your search.";
pub const JOBS_EMPTY: &str = "No jobs found. Try adjusting your search.";
pub const SCHOLARSHIPS_EMPTY: &str = "No scholarships found. Try adjusting your search.";
pub const STARTUPS_EMPTY: &str = "No resources found in this category.";
pub const GENERIC_EMPTY: &str = "Nothing here yet.";
